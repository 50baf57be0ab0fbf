// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `identity`: a named principal (user, device or application).

use graphwire_abstractions::{
    BackingStore, DiscriminatorRegistry, FieldDeserializers, ParseNode, SerializationError, SerializationWriter,
    StoreError, ODATA_TYPE,
};
use once_cell::sync::Lazy;

use crate::{Parsable, TeamworkUserIdentity};

/// Capability of `identity` and its descendants.
pub trait Identityable: Parsable {
    /// The embedded `identity` part.
    fn identity(&self) -> &Identity;

    /// Mutable access to the embedded `identity` part.
    fn identity_mut(&mut self) -> &mut Identity;
}

/// Display name and id of a principal.
#[derive(Debug)]
pub struct Identity {
    backing_store: Box<dyn BackingStore>,
}

root_store!(Identity);

static IDENTITY_SUBTYPES: Lazy<DiscriminatorRegistry<dyn Identityable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn Identityable>::new(Identity::ODATA_TYPE, || Box::new(Identity::new()))
        .with_subtype(TeamworkUserIdentity::ODATA_TYPE, || Box::new(TeamworkUserIdentity::new()))
});

static IDENTITY_FIELDS: Lazy<FieldDeserializers<Identity>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::new();
    fields
        .insert("displayName", |m: &mut Identity, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_display_name(Some(value))?;
            }
            Ok(())
        })
        .insert("id", |m: &mut Identity, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_id(Some(value))?;
            }
            Ok(())
        })
        .insert(ODATA_TYPE, |m: &mut Identity, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_odata_type(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl Identity {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.identity";

    /// Empty instance tagged `#microsoft.graph.identity`.
    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self::tagged(tag)
    }

    /// Build a `teamworkUserIdentity` when the node is tagged as one,
    /// otherwise an `identity`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn Identityable>, SerializationError> {
        IDENTITY_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<Identity> {
        &IDENTITY_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(Some("displayName"), self.display_name()?.as_deref())?;
        writer.write_string_value(Some("id"), self.id()?.as_deref())?;
        writer.write_string_value(Some(ODATA_TYPE), self.odata_type()?.as_deref())?;
        writer.write_additional_data(self.additional_data()?.as_ref())
    }

    /// Display name. Not guaranteed to be stable or unique.
    pub fn display_name(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("displayName")
    }

    /// Set the display name.
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("displayName", value)
    }

    /// Unique identifier of the principal.
    pub fn id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("id")
    }

    /// Set the identifier.
    pub fn set_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("id", value)
    }
}

impl_parsable!(Identity);

impl_able!(Identityable { identity, identity_mut } -> Identity:
    Identity,
    TeamworkUserIdentity,
);
