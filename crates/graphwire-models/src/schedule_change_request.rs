// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `scheduleChangeRequest`: a shift or time-off change awaiting approval.

use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{
    DiscriminatorRegistry, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError,
};
use once_cell::sync::Lazy;

use crate::{
    ChangeTrackedEntity, ChangeTrackedEntityable, OfferShiftRequest, OpenShiftChangeRequest, ScheduleChangeRequestActor,
    ScheduleChangeState, SwapShiftsChangeRequest, TimeOffRequest,
};

/// Capability of `scheduleChangeRequest` and its descendants.
pub trait ScheduleChangeRequestable: ChangeTrackedEntityable {
    /// The embedded `scheduleChangeRequest` part.
    fn schedule_change_request(&self) -> &ScheduleChangeRequest;

    /// Mutable access to the embedded `scheduleChangeRequest` part.
    fn schedule_change_request_mut(&mut self) -> &mut ScheduleChangeRequest;
}

/// Request exchanged between a sender, optionally a recipient, and a manager.
#[derive(Debug)]
pub struct ScheduleChangeRequest {
    base: ChangeTrackedEntity,
}

derive_base!(ScheduleChangeRequest => ChangeTrackedEntity);

static REQUEST_SUBTYPES: Lazy<DiscriminatorRegistry<dyn ScheduleChangeRequestable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn ScheduleChangeRequestable>::new(ScheduleChangeRequest::ODATA_TYPE, || {
        Box::new(ScheduleChangeRequest::new())
    })
    .with_subtype(OfferShiftRequest::ODATA_TYPE, || Box::new(OfferShiftRequest::new()))
    .with_subtype(OpenShiftChangeRequest::ODATA_TYPE, || Box::new(OpenShiftChangeRequest::new()))
    .with_subtype(TimeOffRequest::ODATA_TYPE, || Box::new(TimeOffRequest::new()))
});

static REQUEST_FIELDS: Lazy<FieldDeserializers<ScheduleChangeRequest>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        ChangeTrackedEntity::field_deserializers(),
        |m: &mut ScheduleChangeRequest| &mut m.base,
    );
    fields
        .insert("assignedTo", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_enum_value::<ScheduleChangeRequestActor>()? {
                m.set_assigned_to(Some(value))?;
            }
            Ok(())
        })
        .insert("managerActionDateTime", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_manager_action_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("managerActionMessage", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_manager_action_message(Some(value))?;
            }
            Ok(())
        })
        .insert("managerUserId", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_manager_user_id(Some(value))?;
            }
            Ok(())
        })
        .insert("senderDateTime", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_sender_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("senderMessage", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_sender_message(Some(value))?;
            }
            Ok(())
        })
        .insert("senderUserId", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_sender_user_id(Some(value))?;
            }
            Ok(())
        })
        .insert("state", |m: &mut ScheduleChangeRequest, n| {
            if let Some(value) = n.get_enum_value::<ScheduleChangeState>()? {
                m.set_state(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl ScheduleChangeRequest {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.scheduleChangeRequest";

    /// Empty instance tagged `#microsoft.graph.scheduleChangeRequest`.
    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self {
            base: ChangeTrackedEntity::with_odata_type(tag),
        }
    }

    /// Build the direct subtype named by `@odata.type`, or a
    /// `scheduleChangeRequest`.
    pub fn create_from_discriminator_value(
        node: &dyn ParseNode,
    ) -> Result<Box<dyn ScheduleChangeRequestable>, SerializationError> {
        REQUEST_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<ScheduleChangeRequest> {
        &REQUEST_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_enum_value(Some("assignedTo"), self.assigned_to()?)?;
        writer.write_date_time_value(Some("managerActionDateTime"), self.manager_action_date_time()?.as_ref())?;
        writer.write_string_value(Some("managerActionMessage"), self.manager_action_message()?.as_deref())?;
        writer.write_string_value(Some("managerUserId"), self.manager_user_id()?.as_deref())?;
        writer.write_date_time_value(Some("senderDateTime"), self.sender_date_time()?.as_ref())?;
        writer.write_string_value(Some("senderMessage"), self.sender_message()?.as_deref())?;
        writer.write_string_value(Some("senderUserId"), self.sender_user_id()?.as_deref())?;
        writer.write_enum_value(Some("state"), self.state()?)
    }

    /// Party the request is waiting on.
    pub fn assigned_to(&self) -> Result<Option<ScheduleChangeRequestActor>, StoreError> {
        self.store().get_enum("assignedTo")
    }

    /// Set the party the request is waiting on.
    pub fn set_assigned_to(&mut self, value: Option<ScheduleChangeRequestActor>) -> Result<(), StoreError> {
        self.store_mut().set_enum("assignedTo", value)
    }

    /// When the manager approved or declined.
    pub fn manager_action_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("managerActionDateTime")
    }

    /// Set when the manager acted.
    pub fn set_manager_action_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("managerActionDateTime", value)
    }

    /// Manager's note.
    pub fn manager_action_message(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("managerActionMessage")
    }

    /// Set the manager's note.
    pub fn set_manager_action_message(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("managerActionMessage", value)
    }

    /// User id of the approving manager.
    pub fn manager_user_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("managerUserId")
    }

    /// Set the approving manager.
    pub fn set_manager_user_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("managerUserId", value)
    }

    /// When the sender submitted the request.
    pub fn sender_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("senderDateTime")
    }

    /// Set the submission time.
    pub fn set_sender_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("senderDateTime", value)
    }

    /// Sender's note.
    pub fn sender_message(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("senderMessage")
    }

    /// Set the sender's note.
    pub fn set_sender_message(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("senderMessage", value)
    }

    /// User id of the sender.
    pub fn sender_user_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("senderUserId")
    }

    /// Set the sender.
    pub fn set_sender_user_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("senderUserId", value)
    }

    /// Approval state.
    pub fn state(&self) -> Result<Option<ScheduleChangeState>, StoreError> {
        self.store().get_enum("state")
    }

    /// Set the approval state.
    pub fn set_state(&mut self, value: Option<ScheduleChangeState>) -> Result<(), StoreError> {
        self.store_mut().set_enum("state", value)
    }
}

impl_parsable!(ScheduleChangeRequest);

impl_able!(ScheduleChangeRequestable { schedule_change_request, schedule_change_request_mut } -> ScheduleChangeRequest:
    ScheduleChangeRequest,
    OfferShiftRequest,
    SwapShiftsChangeRequest,
    OpenShiftChangeRequest,
    TimeOffRequest,
);
