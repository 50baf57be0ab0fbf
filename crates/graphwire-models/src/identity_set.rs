// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `identitySet`: the application, device and user behind an action.

use graphwire_abstractions::{
    BackingStore, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError, ODATA_TYPE,
};
use once_cell::sync::Lazy;

use crate::{Identity, Identityable};

/// Up to three identities describing who performed an action.
#[derive(Debug)]
pub struct IdentitySet {
    backing_store: Box<dyn BackingStore>,
}

root_store!(IdentitySet);

static IDENTITY_SET_FIELDS: Lazy<FieldDeserializers<IdentitySet>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::new();
    fields
        .insert("application", |m: &mut IdentitySet, n| {
            if let Some(value) = n.get_object_value(Identity::create_from_discriminator_value)? {
                m.set_application(Some(value))?;
            }
            Ok(())
        })
        .insert("device", |m: &mut IdentitySet, n| {
            if let Some(value) = n.get_object_value(Identity::create_from_discriminator_value)? {
                m.set_device(Some(value))?;
            }
            Ok(())
        })
        .insert(ODATA_TYPE, |m: &mut IdentitySet, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_odata_type(Some(value))?;
            }
            Ok(())
        })
        .insert("user", |m: &mut IdentitySet, n| {
            if let Some(value) = n.get_object_value(Identity::create_from_discriminator_value)? {
                m.set_user(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl IdentitySet {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.identitySet";

    /// Empty instance tagged `#microsoft.graph.identitySet`.
    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    /// No known subtypes: always an `identitySet`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<IdentitySet> {
        &IDENTITY_SET_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_object_value(Some("application"), self.application()?)?;
        writer.write_object_value(Some("device"), self.device()?)?;
        writer.write_string_value(Some(ODATA_TYPE), self.odata_type()?.as_deref())?;
        writer.write_object_value(Some("user"), self.user()?)?;
        writer.write_additional_data(self.additional_data()?.as_ref())
    }

    fn identity_at(&self, key: &str) -> Result<Option<&dyn Identityable>, StoreError> {
        Ok(self.store().get_object::<Box<dyn Identityable>>(key)?.map(|v| &**v))
    }

    /// Application involved.
    pub fn application(&self) -> Result<Option<&dyn Identityable>, StoreError> {
        self.identity_at("application")
    }

    /// Set the application.
    pub fn set_application(&mut self, value: Option<Box<dyn Identityable>>) -> Result<(), StoreError> {
        self.store_mut().set_object("application", value)
    }

    /// Device involved.
    pub fn device(&self) -> Result<Option<&dyn Identityable>, StoreError> {
        self.identity_at("device")
    }

    /// Set the device.
    pub fn set_device(&mut self, value: Option<Box<dyn Identityable>>) -> Result<(), StoreError> {
        self.store_mut().set_object("device", value)
    }

    /// User involved.
    pub fn user(&self) -> Result<Option<&dyn Identityable>, StoreError> {
        self.identity_at("user")
    }

    /// Set the user.
    pub fn set_user(&mut self, value: Option<Box<dyn Identityable>>) -> Result<(), StoreError> {
        self.store_mut().set_object("user", value)
    }
}

impl_parsable!(IdentitySet);
