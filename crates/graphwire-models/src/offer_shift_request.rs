// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `offerShiftRequest`: offer one of the sender's shifts to a coworker.

use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{
    DiscriminatorRegistry, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError,
};
use once_cell::sync::Lazy;

use crate::{ScheduleChangeRequest, ScheduleChangeRequestable, SwapShiftsChangeRequest};

/// Capability of `offerShiftRequest` and its descendants.
pub trait OfferShiftRequestable: ScheduleChangeRequestable {
    /// The embedded `offerShiftRequest` part.
    fn offer_shift_request(&self) -> &OfferShiftRequest;

    /// Mutable access to the embedded `offerShiftRequest` part.
    fn offer_shift_request_mut(&mut self) -> &mut OfferShiftRequest;
}

/// Request to hand a shift to a recipient.
#[derive(Debug)]
pub struct OfferShiftRequest {
    base: ScheduleChangeRequest,
}

derive_base!(OfferShiftRequest => ScheduleChangeRequest);

static OFFER_SUBTYPES: Lazy<DiscriminatorRegistry<dyn OfferShiftRequestable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn OfferShiftRequestable>::new(OfferShiftRequest::ODATA_TYPE, || {
        Box::new(OfferShiftRequest::new())
    })
    .with_subtype(SwapShiftsChangeRequest::ODATA_TYPE, || Box::new(SwapShiftsChangeRequest::new()))
});

static OFFER_FIELDS: Lazy<FieldDeserializers<OfferShiftRequest>> = Lazy::new(|| {
    let mut fields =
        FieldDeserializers::inherit(ScheduleChangeRequest::field_deserializers(), |m: &mut OfferShiftRequest| {
            &mut m.base
        });
    fields
        .insert("recipientActionDateTime", |m: &mut OfferShiftRequest, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_recipient_action_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("recipientActionMessage", |m: &mut OfferShiftRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_recipient_action_message(Some(value))?;
            }
            Ok(())
        })
        .insert("recipientUserId", |m: &mut OfferShiftRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_recipient_user_id(Some(value))?;
            }
            Ok(())
        })
        .insert("senderShiftId", |m: &mut OfferShiftRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_sender_shift_id(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl OfferShiftRequest {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.offerShiftRequest";

    /// Empty instance tagged `#microsoft.graph.offerShiftRequest`.
    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self {
            base: ScheduleChangeRequest::with_odata_type(tag),
        }
    }

    /// Build a `swapShiftsChangeRequest` when the node is tagged as one,
    /// otherwise an `offerShiftRequest`.
    pub fn create_from_discriminator_value(
        node: &dyn ParseNode,
    ) -> Result<Box<dyn OfferShiftRequestable>, SerializationError> {
        OFFER_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<OfferShiftRequest> {
        &OFFER_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_date_time_value(Some("recipientActionDateTime"), self.recipient_action_date_time()?.as_ref())?;
        writer.write_string_value(Some("recipientActionMessage"), self.recipient_action_message()?.as_deref())?;
        writer.write_string_value(Some("recipientUserId"), self.recipient_user_id()?.as_deref())?;
        writer.write_string_value(Some("senderShiftId"), self.sender_shift_id()?.as_deref())
    }

    /// When the recipient accepted or declined.
    pub fn recipient_action_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("recipientActionDateTime")
    }

    /// Set when the recipient acted.
    pub fn set_recipient_action_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("recipientActionDateTime", value)
    }

    /// Recipient's note.
    pub fn recipient_action_message(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("recipientActionMessage")
    }

    /// Set the recipient's note.
    pub fn set_recipient_action_message(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("recipientActionMessage", value)
    }

    /// User id of the recipient.
    pub fn recipient_user_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("recipientUserId")
    }

    /// Set the recipient.
    pub fn set_recipient_user_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("recipientUserId", value)
    }

    /// Shift being offered.
    pub fn sender_shift_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("senderShiftId")
    }

    /// Set the shift being offered.
    pub fn set_sender_shift_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("senderShiftId", value)
    }
}

impl_parsable!(OfferShiftRequest);

impl_able!(OfferShiftRequestable { offer_shift_request, offer_shift_request_mut } -> OfferShiftRequest:
    OfferShiftRequest,
    SwapShiftsChangeRequest,
);
