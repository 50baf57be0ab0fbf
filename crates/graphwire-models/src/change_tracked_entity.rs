// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `changeTrackedEntity`: entities that record who changed them and when.

use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{
    DiscriminatorRegistry, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError,
};
use once_cell::sync::Lazy;

use crate::{
    Entity, Entityable, IdentitySet, OfferShiftRequest, OpenShiftChangeRequest, ScheduleChangeRequest,
    SchedulingGroup, SwapShiftsChangeRequest, TimeOffRequest,
};

/// Capability of `changeTrackedEntity` and its descendants.
pub trait ChangeTrackedEntityable: Entityable {
    /// The embedded `changeTrackedEntity` part.
    fn change_tracked_entity(&self) -> &ChangeTrackedEntity;

    /// Mutable access to the embedded `changeTrackedEntity` part.
    fn change_tracked_entity_mut(&mut self) -> &mut ChangeTrackedEntity;
}

/// Entity with creation and modification audit fields.
#[derive(Debug)]
pub struct ChangeTrackedEntity {
    base: Entity,
}

derive_base!(ChangeTrackedEntity => Entity);

static CHANGE_TRACKED_SUBTYPES: Lazy<DiscriminatorRegistry<dyn ChangeTrackedEntityable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn ChangeTrackedEntityable>::new(ChangeTrackedEntity::ODATA_TYPE, || {
        Box::new(ChangeTrackedEntity::new())
    })
    .with_subtype(ScheduleChangeRequest::ODATA_TYPE, || Box::new(ScheduleChangeRequest::new()))
    .with_subtype(SchedulingGroup::ODATA_TYPE, || Box::new(SchedulingGroup::new()))
});

static CHANGE_TRACKED_FIELDS: Lazy<FieldDeserializers<ChangeTrackedEntity>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut ChangeTrackedEntity| {
        &mut m.base
    });
    fields
        .insert("createdBy", |m: &mut ChangeTrackedEntity, n| {
            if let Some(value) = n.get_object_value(IdentitySet::create_from_discriminator_value)? {
                m.set_created_by(Some(*value))?;
            }
            Ok(())
        })
        .insert("createdDateTime", |m: &mut ChangeTrackedEntity, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_created_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("lastModifiedBy", |m: &mut ChangeTrackedEntity, n| {
            if let Some(value) = n.get_object_value(IdentitySet::create_from_discriminator_value)? {
                m.set_last_modified_by(Some(*value))?;
            }
            Ok(())
        })
        .insert("lastModifiedDateTime", |m: &mut ChangeTrackedEntity, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_last_modified_date_time(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl ChangeTrackedEntity {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.changeTrackedEntity";

    /// Empty instance tagged `#microsoft.graph.changeTrackedEntity`.
    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self {
            base: Entity::with_odata_type(tag),
        }
    }

    /// Build the direct subtype named by `@odata.type`, or a
    /// `changeTrackedEntity`.
    pub fn create_from_discriminator_value(
        node: &dyn ParseNode,
    ) -> Result<Box<dyn ChangeTrackedEntityable>, SerializationError> {
        CHANGE_TRACKED_SUBTYPES.create(node)
    }

    /// Wire field deserializers, including the inherited `entity` fields.
    pub fn field_deserializers() -> &'static FieldDeserializers<ChangeTrackedEntity> {
        &CHANGE_TRACKED_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_object_value(Some("createdBy"), self.created_by()?)?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time()?.as_ref())?;
        writer.write_object_value(Some("lastModifiedBy"), self.last_modified_by()?)?;
        writer.write_date_time_value(Some("lastModifiedDateTime"), self.last_modified_date_time()?.as_ref())
    }

    /// Who created the entity.
    pub fn created_by(&self) -> Result<Option<&IdentitySet>, StoreError> {
        self.store().get_object("createdBy")
    }

    /// Set who created the entity.
    pub fn set_created_by(&mut self, value: Option<IdentitySet>) -> Result<(), StoreError> {
        self.store_mut().set_object("createdBy", value)
    }

    /// Creation timestamp.
    pub fn created_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("createdDateTime")
    }

    /// Set the creation timestamp.
    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("createdDateTime", value)
    }

    /// Who last modified the entity.
    pub fn last_modified_by(&self) -> Result<Option<&IdentitySet>, StoreError> {
        self.store().get_object("lastModifiedBy")
    }

    /// Set who last modified the entity.
    pub fn set_last_modified_by(&mut self, value: Option<IdentitySet>) -> Result<(), StoreError> {
        self.store_mut().set_object("lastModifiedBy", value)
    }

    /// Last modification timestamp.
    pub fn last_modified_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("lastModifiedDateTime")
    }

    /// Set the last modification timestamp.
    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("lastModifiedDateTime", value)
    }
}

impl_parsable!(ChangeTrackedEntity);

impl_able!(ChangeTrackedEntityable { change_tracked_entity, change_tracked_entity_mut } -> ChangeTrackedEntity:
    ChangeTrackedEntity,
    ScheduleChangeRequest,
    OfferShiftRequest,
    SwapShiftsChangeRequest,
    OpenShiftChangeRequest,
    TimeOffRequest,
    SchedulingGroup,
);
