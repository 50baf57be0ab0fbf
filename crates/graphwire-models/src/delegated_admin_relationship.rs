// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `delegatedAdminRelationship`: a partner's admin access to a customer
//! tenant.

use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{
    DiscriminatorRegistry, FieldDeserializers, IsoDuration, ParseNode, SerializationError, SerializationWriter,
    StoreError,
};
use once_cell::sync::Lazy;

use crate::{
    DelegatedAdminRelationshipCustomerParticipant, DelegatedAdminRelationshipStatus, Entity, Entityable,
    ResellerDelegatedAdminRelationship,
};

/// Capability of `delegatedAdminRelationship` and its descendants.
pub trait DelegatedAdminRelationshipable: Entityable {
    /// The embedded `delegatedAdminRelationship` part.
    fn delegated_admin_relationship(&self) -> &DelegatedAdminRelationship;

    /// Mutable access to the embedded `delegatedAdminRelationship` part.
    fn delegated_admin_relationship_mut(&mut self) -> &mut DelegatedAdminRelationship;
}

/// Time-boxed admin relationship between a partner and a customer.
#[derive(Debug)]
pub struct DelegatedAdminRelationship {
    base: Entity,
}

derive_base!(DelegatedAdminRelationship => Entity);

static RELATIONSHIP_SUBTYPES: Lazy<DiscriminatorRegistry<dyn DelegatedAdminRelationshipable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn DelegatedAdminRelationshipable>::new(DelegatedAdminRelationship::ODATA_TYPE, || {
        Box::new(DelegatedAdminRelationship::new())
    })
    .with_subtype(ResellerDelegatedAdminRelationship::ODATA_TYPE, || {
        Box::new(ResellerDelegatedAdminRelationship::new())
    })
});

static RELATIONSHIP_FIELDS: Lazy<FieldDeserializers<DelegatedAdminRelationship>> = Lazy::new(|| {
    let mut fields =
        FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut DelegatedAdminRelationship| &mut m.base);
    fields
        .insert("autoExtendDuration", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) = n.get_iso_duration_value()? {
                m.set_auto_extend_duration(Some(value))?;
            }
            Ok(())
        })
        .insert("createdDateTime", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_created_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("customer", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) =
                n.get_object_value(DelegatedAdminRelationshipCustomerParticipant::create_from_discriminator_value)?
            {
                m.set_customer(Some(*value))?;
            }
            Ok(())
        })
        .insert("displayName", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_display_name(Some(value))?;
            }
            Ok(())
        })
        .insert("duration", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) = n.get_iso_duration_value()? {
                m.set_duration(Some(value))?;
            }
            Ok(())
        })
        .insert("endDateTime", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_end_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("status", |m: &mut DelegatedAdminRelationship, n| {
            if let Some(value) = n.get_enum_value::<DelegatedAdminRelationshipStatus>()? {
                m.set_status(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl DelegatedAdminRelationship {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.delegatedAdminRelationship";

    /// Empty instance tagged `#microsoft.graph.delegatedAdminRelationship`.
    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self {
            base: Entity::with_odata_type(tag),
        }
    }

    /// Build a `resellerDelegatedAdminRelationship` when the node is tagged
    /// as one, otherwise a `delegatedAdminRelationship`.
    pub fn create_from_discriminator_value(
        node: &dyn ParseNode,
    ) -> Result<Box<dyn DelegatedAdminRelationshipable>, SerializationError> {
        RELATIONSHIP_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<DelegatedAdminRelationship> {
        &RELATIONSHIP_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_iso_duration_value(Some("autoExtendDuration"), self.auto_extend_duration()?.as_ref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time()?.as_ref())?;
        writer.write_object_value(Some("customer"), self.customer()?)?;
        writer.write_string_value(Some("displayName"), self.display_name()?.as_deref())?;
        writer.write_iso_duration_value(Some("duration"), self.duration()?.as_ref())?;
        writer.write_date_time_value(Some("endDateTime"), self.end_date_time()?.as_ref())?;
        writer.write_enum_value(Some("status"), self.status()?)
    }

    /// Renewal period applied when the relationship auto-extends. `PT0S`
    /// disables it.
    pub fn auto_extend_duration(&self) -> Result<Option<IsoDuration>, StoreError> {
        self.store().get_value("autoExtendDuration")
    }

    /// Set the auto-extend period.
    pub fn set_auto_extend_duration(&mut self, value: Option<IsoDuration>) -> Result<(), StoreError> {
        self.store_mut().set_value("autoExtendDuration", value)
    }

    /// When the relationship was created.
    pub fn created_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("createdDateTime")
    }

    /// Set the creation time.
    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("createdDateTime", value)
    }

    /// Customer tenant.
    pub fn customer(&self) -> Result<Option<&DelegatedAdminRelationshipCustomerParticipant>, StoreError> {
        self.store().get_object("customer")
    }

    /// Set the customer tenant.
    pub fn set_customer(
        &mut self,
        value: Option<DelegatedAdminRelationshipCustomerParticipant>,
    ) -> Result<(), StoreError> {
        self.store_mut().set_object("customer", value)
    }

    /// Name shown to partner and customer.
    pub fn display_name(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("displayName")
    }

    /// Set the name.
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("displayName", value)
    }

    /// Lifetime of the relationship.
    pub fn duration(&self) -> Result<Option<IsoDuration>, StoreError> {
        self.store().get_value("duration")
    }

    /// Set the lifetime.
    pub fn set_duration(&mut self, value: Option<IsoDuration>) -> Result<(), StoreError> {
        self.store_mut().set_value("duration", value)
    }

    /// When the relationship ends.
    pub fn end_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("endDateTime")
    }

    /// Set the end time.
    pub fn set_end_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("endDateTime", value)
    }

    /// Lifecycle state.
    pub fn status(&self) -> Result<Option<DelegatedAdminRelationshipStatus>, StoreError> {
        self.store().get_enum("status")
    }

    /// Set the lifecycle state.
    pub fn set_status(&mut self, value: Option<DelegatedAdminRelationshipStatus>) -> Result<(), StoreError> {
        self.store_mut().set_enum("status", value)
    }
}

impl_parsable!(DelegatedAdminRelationship);

impl_able!(DelegatedAdminRelationshipable {
    delegated_admin_relationship,
    delegated_admin_relationship_mut
} -> DelegatedAdminRelationship:
    DelegatedAdminRelationship,
    ResellerDelegatedAdminRelationship,
);
