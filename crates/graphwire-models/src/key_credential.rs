// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `keyCredential`: a certificate attached to an application or principal.

use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{
    BackingStore, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError, ODATA_TYPE,
};
use once_cell::sync::Lazy;
use uuid::Uuid;

/// Certificate credential. `key` and `customKeyIdentifier` travel as base64.
#[derive(Debug)]
pub struct KeyCredential {
    backing_store: Box<dyn BackingStore>,
}

root_store!(KeyCredential);

static KEY_CREDENTIAL_FIELDS: Lazy<FieldDeserializers<KeyCredential>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::new();
    fields
        .insert("customKeyIdentifier", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_byte_array_value()? {
                m.set_custom_key_identifier(Some(value))?;
            }
            Ok(())
        })
        .insert("displayName", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_display_name(Some(value))?;
            }
            Ok(())
        })
        .insert("endDateTime", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_end_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("key", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_byte_array_value()? {
                m.set_key(Some(value))?;
            }
            Ok(())
        })
        .insert("keyId", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_uuid_value()? {
                m.set_key_id(Some(value))?;
            }
            Ok(())
        })
        .insert(ODATA_TYPE, |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_odata_type(Some(value))?;
            }
            Ok(())
        })
        .insert("startDateTime", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_start_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("type", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_type(Some(value))?;
            }
            Ok(())
        })
        .insert("usage", |m: &mut KeyCredential, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_usage(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl KeyCredential {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.keyCredential";

    /// Empty instance tagged `#microsoft.graph.keyCredential`.
    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    /// No known subtypes.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<KeyCredential> {
        &KEY_CREDENTIAL_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_byte_array_value(Some("customKeyIdentifier"), self.custom_key_identifier()?.as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name()?.as_deref())?;
        writer.write_date_time_value(Some("endDateTime"), self.end_date_time()?.as_ref())?;
        writer.write_byte_array_value(Some("key"), self.key()?.as_deref())?;
        writer.write_uuid_value(Some("keyId"), self.key_id()?.as_ref())?;
        writer.write_string_value(Some(ODATA_TYPE), self.odata_type()?.as_deref())?;
        writer.write_date_time_value(Some("startDateTime"), self.start_date_time()?.as_ref())?;
        writer.write_string_value(Some("type"), self.r#type()?.as_deref())?;
        writer.write_string_value(Some("usage"), self.usage()?.as_deref())?;
        writer.write_additional_data(self.additional_data()?.as_ref())
    }

    /// Caller-chosen identifier, usually the certificate thumbprint.
    pub fn custom_key_identifier(&self) -> Result<Option<Bytes>, StoreError> {
        self.store().get_value("customKeyIdentifier")
    }

    /// Set the custom identifier.
    pub fn set_custom_key_identifier(&mut self, value: Option<Bytes>) -> Result<(), StoreError> {
        self.store_mut().set_value("customKeyIdentifier", value)
    }

    /// Friendly name.
    pub fn display_name(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("displayName")
    }

    /// Set the friendly name.
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("displayName", value)
    }

    /// Expiry.
    pub fn end_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("endDateTime")
    }

    /// Set the expiry.
    pub fn set_end_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("endDateTime", value)
    }

    /// Certificate bytes. The service returns it only when selected.
    pub fn key(&self) -> Result<Option<Bytes>, StoreError> {
        self.store().get_value("key")
    }

    /// Set the certificate bytes.
    pub fn set_key(&mut self, value: Option<Bytes>) -> Result<(), StoreError> {
        self.store_mut().set_value("key", value)
    }

    /// Unique key id.
    pub fn key_id(&self) -> Result<Option<Uuid>, StoreError> {
        self.store().get_value("keyId")
    }

    /// Set the key id.
    pub fn set_key_id(&mut self, value: Option<Uuid>) -> Result<(), StoreError> {
        self.store_mut().set_value("keyId", value)
    }

    /// Start of validity.
    pub fn start_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("startDateTime")
    }

    /// Set the start of validity.
    pub fn set_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("startDateTime", value)
    }

    /// Credential type, e.g. `AsymmetricX509Cert`.
    pub fn r#type(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("type")
    }

    /// Set the credential type.
    pub fn set_type(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("type", value)
    }

    /// `Verify` or `Sign`.
    pub fn usage(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("usage")
    }

    /// Set the usage.
    pub fn set_usage(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("usage", value)
    }
}

impl_parsable!(KeyCredential);
