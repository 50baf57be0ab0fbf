// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `entity`: root of every addressable resource.

use graphwire_abstractions::{
    new_backing_store, AdditionalData, BackingStore, DiscriminatorRegistry, FieldDeserializers, ParseNode,
    SerializationError, SerializationWriter, StoreError, ODATA_TYPE,
};
use once_cell::sync::Lazy;
use tracing::warn;

use crate::{
    ChangeTrackedEntity, DelegatedAdminRelationship, DeviceConfiguration, Parsable, ResellerDelegatedAdminRelationship,
    Schedule, ScheduleChangeRequest, SchedulingGroup, OfferShiftRequest, OpenShiftChangeRequest,
    SwapShiftsChangeRequest, TimeOffRequest, WindowsUpdateForBusinessConfiguration,
};

/// Store key of the discriminator property.
pub(crate) const ODATA_TYPE_KEY: &str = "odataType";

/// Capability shared by `entity` and every type derived from it.
pub trait Entityable: Parsable {
    /// The embedded `entity` part.
    fn entity(&self) -> &Entity;

    /// Mutable access to the embedded `entity` part.
    fn entity_mut(&mut self) -> &mut Entity;
}

/// Base resource: an id, a discriminator and whatever else the service sent.
#[derive(Debug)]
pub struct Entity {
    backing_store: Box<dyn BackingStore>,
}

static ENTITY_SUBTYPES: Lazy<DiscriminatorRegistry<dyn Entityable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn Entityable>::new(Entity::ODATA_TYPE, || Box::new(Entity::new()))
        .with_subtype(ChangeTrackedEntity::ODATA_TYPE, || Box::new(ChangeTrackedEntity::new()))
        .with_subtype(DelegatedAdminRelationship::ODATA_TYPE, || {
            Box::new(DelegatedAdminRelationship::new())
        })
        .with_subtype(DeviceConfiguration::ODATA_TYPE, || Box::new(DeviceConfiguration::new()))
        .with_subtype(Schedule::ODATA_TYPE, || Box::new(Schedule::new()))
});

static ENTITY_FIELDS: Lazy<FieldDeserializers<Entity>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::new();
    fields
        .insert("id", |m: &mut Entity, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_id(Some(value))?;
            }
            Ok(())
        })
        .insert(ODATA_TYPE, |m: &mut Entity, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_odata_type(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl Entity {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.entity";

    /// Empty entity on a fresh backing store. The discriminator is left unset.
    pub fn new() -> Self {
        Self {
            backing_store: new_backing_store(),
        }
    }

    /// Empty entity whose discriminator is preset to `tag`; used by derived
    /// constructors.
    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        let mut entity = Self::new();
        if let Err(err) = entity.set_odata_type(Some(tag.to_owned())) {
            warn!(%err, tag, "backing store rejected the default discriminator");
        }
        entity
    }

    /// Build the type named by the node's `@odata.type` among the direct
    /// subtypes of `entity`, or an `entity`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn Entityable>, SerializationError> {
        ENTITY_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<Entity> {
        &ENTITY_FIELDS
    }

    /// Direct subtypes recognized by [`Entity::create_from_discriminator_value`].
    pub fn subtype_tags() -> impl Iterator<Item = &'static str> {
        ENTITY_SUBTYPES.subtype_tags()
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(Some("id"), self.id()?.as_deref())?;
        writer.write_string_value(Some(ODATA_TYPE), self.odata_type()?.as_deref())?;
        writer.write_additional_data(self.additional_data()?.as_ref())
    }

    /// Property store of this instance.
    pub fn store(&self) -> &dyn BackingStore {
        self.backing_store.as_ref()
    }

    /// Mutable property store of this instance.
    pub fn store_mut(&mut self) -> &mut dyn BackingStore {
        self.backing_store.as_mut()
    }

    /// Replace the property store.
    pub fn set_store(&mut self, store: Box<dyn BackingStore>) {
        self.backing_store = store;
    }

    /// Unique identifier. Read-only on the service side.
    pub fn id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("id")
    }

    /// Set the identifier.
    pub fn set_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("id", value)
    }

    /// Discriminator naming the concrete type.
    pub fn odata_type(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value(ODATA_TYPE_KEY)
    }

    /// Set the discriminator.
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value(ODATA_TYPE_KEY, value)
    }

    /// Members of the payload that no declared field consumed.
    pub fn additional_data(&self) -> Result<Option<AdditionalData>, StoreError> {
        self.store().additional_data()
    }

    /// Replace the additional data.
    pub fn set_additional_data(&mut self, value: Option<AdditionalData>) -> Result<(), StoreError> {
        self.store_mut().set_additional_data(value)
    }
}

impl_parsable!(Entity);

impl_able!(Entityable { entity, entity_mut } -> Entity:
    Entity,
    ChangeTrackedEntity,
    ScheduleChangeRequest,
    OfferShiftRequest,
    SwapShiftsChangeRequest,
    OpenShiftChangeRequest,
    TimeOffRequest,
    SchedulingGroup,
    Schedule,
    DeviceConfiguration,
    WindowsUpdateForBusinessConfiguration,
    DelegatedAdminRelationship,
    ResellerDelegatedAdminRelationship,
);

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_entity_has_no_discriminator() {
        let entity = Entity::new();
        assert_eq!(entity.odata_type().unwrap(), None);
        assert_eq!(entity.id().unwrap(), None);
    }

    #[test]
    fn dispatch_covers_direct_subtypes_only() {
        let tags: Vec<_> = Entity::subtype_tags().collect();
        assert_eq!(
            tags,
            vec![
                "#microsoft.graph.changeTrackedEntity",
                "#microsoft.graph.delegatedAdminRelationship",
                "#microsoft.graph.deviceConfiguration",
                "#microsoft.graph.schedule",
            ]
        );

        let doc = json!({ "@odata.type": "#microsoft.graph.offerShiftRequest", "id": "x" });
        let model = graphwire_json::from_value(&doc, Entity::create_from_discriminator_value)
            .unwrap()
            .expect("object");
        let model: &dyn Parsable = &*model;
        assert!(model.is::<Entity>());
    }

    #[test]
    fn type_mismatch_surfaces_as_an_error() {
        let mut entity = Entity::new();
        entity.store_mut().set_value("id", Some(7_i32)).unwrap();
        assert!(matches!(entity.id(), Err(StoreError::TypeMismatch { .. })));
    }

    #[test]
    fn root_fields_then_additional_data() {
        let doc = json!({ "zeta": 1, "id": "e1", "@odata.type": "#microsoft.graph.entity" });
        let model = graphwire_json::from_value(&doc, Entity::create_from_discriminator_value)
            .unwrap()
            .expect("object");
        let written = graphwire_json::to_vec(&*model).unwrap();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            r##"{"id":"e1","@odata.type":"#microsoft.graph.entity","zeta":1}"##
        );
    }
}
