// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Catalog of every model type, for tooling that picks a type by name.
//!
//! Entries are sorted by wire name. Each one carries the type's root factory
//! (its `create_from_discriminator_value`), so parsing through an entry
//! dispatches exactly as the typed API would.

use std::any::{Any, TypeId};

use graphwire_abstractions::{ParseNode, SerializationError};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::{
    ChangeTrackedEntity, DelegatedAdminRelationship, DelegatedAdminRelationshipCustomerParticipant,
    DeviceConfiguration, Entity, Identity, IdentitySet, KeyCredential, OfferShiftRequest, OpenShiftChangeRequest,
    Parsable, ResellerDelegatedAdminRelationship, Schedule, ScheduleChangeRequest, SchedulingGroup,
    SwapShiftsChangeRequest, TeamworkUserIdentity, TimeOffRequest, WindowsUpdateActiveHoursInstall,
    WindowsUpdateForBusinessConfiguration, WindowsUpdateInstallScheduleType, WindowsUpdateScheduledInstall,
};

/// Root factory erased to [`Parsable`].
pub type ModelFactory = fn(&dyn ParseNode) -> Result<Box<dyn Parsable>, SerializationError>;

/// Catalog lookups and catalog-driven parsing failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No model has this wire name or discriminator tag.
    #[error("unknown model type: {0}")]
    UnknownModel(String),
    /// The payload was `null`.
    #[error("payload for {0} is null")]
    NullPayload(&'static str),
    /// The payload did not fit the model.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// Descriptor for one model type.
#[derive(Debug, Clone, Copy)]
pub struct ModelDef {
    /// Wire name, e.g. `offerShiftRequest`.
    pub name: &'static str,
    /// Discriminator tag, e.g. `#microsoft.graph.offerShiftRequest`.
    pub tag: &'static str,
    /// Wire name of the base type, `None` for roots.
    pub base: Option<&'static str>,
    type_id: TypeId,
    field_names: fn() -> Vec<&'static str>,
    create: ModelFactory,
}

impl ModelDef {
    /// Names accepted by the type's field deserializers, inherited ones
    /// included, in sorted order.
    pub fn field_names(&self) -> Vec<&'static str> {
        (self.field_names)()
    }

    /// The type's root factory.
    pub const fn factory(&self) -> ModelFactory {
        self.create
    }

    /// Build a model from an object node through this type's factory.
    pub fn parse(&self, node: &dyn ParseNode) -> Result<Box<dyn Parsable>, CatalogError> {
        node.get_object_value(self.create)?
            .ok_or(CatalogError::NullPayload(self.name))
    }
}

macro_rules! model {
    ($ty:ty, $name:literal, $base:expr) => {
        ModelDef {
            name: $name,
            tag: <$ty>::ODATA_TYPE,
            base: $base,
            type_id: TypeId::of::<$ty>(),
            field_names: || <$ty>::field_deserializers().names().collect(),
            create: |node| {
                let model: Box<dyn Parsable> = <$ty>::create_from_discriminator_value(node)?;
                Ok(model)
            },
        }
    };
}

static CATALOG: Lazy<Vec<ModelDef>> = Lazy::new(|| {
    let mut defs = vec![
        model!(ChangeTrackedEntity, "changeTrackedEntity", Some("entity")),
        model!(DelegatedAdminRelationship, "delegatedAdminRelationship", Some("entity")),
        model!(
            DelegatedAdminRelationshipCustomerParticipant,
            "delegatedAdminRelationshipCustomerParticipant",
            None
        ),
        model!(DeviceConfiguration, "deviceConfiguration", Some("entity")),
        model!(Entity, "entity", None),
        model!(Identity, "identity", None),
        model!(IdentitySet, "identitySet", None),
        model!(KeyCredential, "keyCredential", None),
        model!(OfferShiftRequest, "offerShiftRequest", Some("scheduleChangeRequest")),
        model!(OpenShiftChangeRequest, "openShiftChangeRequest", Some("scheduleChangeRequest")),
        model!(
            ResellerDelegatedAdminRelationship,
            "resellerDelegatedAdminRelationship",
            Some("delegatedAdminRelationship")
        ),
        model!(Schedule, "schedule", Some("entity")),
        model!(ScheduleChangeRequest, "scheduleChangeRequest", Some("changeTrackedEntity")),
        model!(SchedulingGroup, "schedulingGroup", Some("changeTrackedEntity")),
        model!(SwapShiftsChangeRequest, "swapShiftsChangeRequest", Some("offerShiftRequest")),
        model!(TeamworkUserIdentity, "teamworkUserIdentity", Some("identity")),
        model!(TimeOffRequest, "timeOffRequest", Some("scheduleChangeRequest")),
        model!(
            WindowsUpdateActiveHoursInstall,
            "windowsUpdateActiveHoursInstall",
            Some("windowsUpdateInstallScheduleType")
        ),
        model!(
            WindowsUpdateForBusinessConfiguration,
            "windowsUpdateForBusinessConfiguration",
            Some("deviceConfiguration")
        ),
        model!(WindowsUpdateInstallScheduleType, "windowsUpdateInstallScheduleType", None),
        model!(
            WindowsUpdateScheduledInstall,
            "windowsUpdateScheduledInstall",
            Some("windowsUpdateInstallScheduleType")
        ),
    ];
    defs.sort_by_key(|def| def.name);
    defs
});

/// Every catalogued model, sorted by wire name.
pub fn catalog() -> &'static [ModelDef] {
    &CATALOG
}

/// Find a model by wire name (`schedule`) or discriminator tag
/// (`#microsoft.graph.schedule`).
pub fn lookup(name: &str) -> Result<&'static ModelDef, CatalogError> {
    catalog()
        .iter()
        .find(|def| def.name == name || def.tag == name)
        .ok_or_else(|| CatalogError::UnknownModel(name.to_owned()))
}

/// Catalog entry for the concrete type of `model`.
pub fn describe(model: &dyn Parsable) -> Option<&'static ModelDef> {
    let id = (model as &dyn Any).type_id();
    catalog().iter().find(|def| def.type_id == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_are_unique_and_sorted() {
        let names: Vec<_> = catalog().iter().map(|def| def.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn every_base_is_catalogued() {
        for def in catalog() {
            if let Some(base) = def.base {
                assert!(lookup(base).is_ok(), "{} names missing base {base}", def.name);
            }
        }
    }

    #[test]
    fn derived_field_names_cover_the_base() {
        for def in catalog() {
            let Some(base) = def.base else { continue };
            let base_fields = lookup(base).unwrap().field_names();
            let fields = def.field_names();
            for name in base_fields {
                assert!(fields.contains(&name), "{} lacks inherited {name}", def.name);
            }
        }
    }

    #[test]
    fn lookup_accepts_tags_and_rejects_unknown_names() {
        assert_eq!(lookup("#microsoft.graph.schedule").unwrap().name, "schedule");
        assert!(matches!(lookup("shift"), Err(CatalogError::UnknownModel(name)) if name == "shift"));
    }

    #[test]
    fn parse_dispatches_and_describe_finds_the_concrete_entry() {
        let doc = json!({
            "@odata.type": "#microsoft.graph.swapShiftsChangeRequest",
            "recipientShiftId": "s2",
        });
        let node = graphwire_json::JsonParseNode::new(&doc);
        let model = lookup("offerShiftRequest").unwrap().parse(&node).unwrap();
        assert_eq!(describe(&*model).unwrap().name, "swapShiftsChangeRequest");
    }

    #[test]
    fn null_payload_is_reported() {
        let doc = serde_json::Value::Null;
        let node = graphwire_json::JsonParseNode::new(&doc);
        let err = lookup("entity").unwrap().parse(&node).err().expect("null");
        assert!(matches!(err, CatalogError::NullPayload("entity")));
    }
}
