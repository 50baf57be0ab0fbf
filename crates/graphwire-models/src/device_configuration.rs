// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `deviceConfiguration`: an Intune device configuration profile.

use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{
    DiscriminatorRegistry, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError,
};
use once_cell::sync::Lazy;

use crate::{Entity, Entityable, WindowsUpdateForBusinessConfiguration};

/// Capability of `deviceConfiguration` and its descendants.
pub trait DeviceConfigurationable: Entityable {
    /// The embedded `deviceConfiguration` part.
    fn device_configuration(&self) -> &DeviceConfiguration;

    /// Mutable access to the embedded `deviceConfiguration` part.
    fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration;
}

/// Base of every device configuration profile.
#[derive(Debug)]
pub struct DeviceConfiguration {
    base: Entity,
}

derive_base!(DeviceConfiguration => Entity);

static DEVICE_CONFIGURATION_SUBTYPES: Lazy<DiscriminatorRegistry<dyn DeviceConfigurationable>> = Lazy::new(|| {
    DiscriminatorRegistry::<dyn DeviceConfigurationable>::new(DeviceConfiguration::ODATA_TYPE, || {
        Box::new(DeviceConfiguration::new())
    })
    .with_subtype(WindowsUpdateForBusinessConfiguration::ODATA_TYPE, || {
        Box::new(WindowsUpdateForBusinessConfiguration::new())
    })
});

static DEVICE_CONFIGURATION_FIELDS: Lazy<FieldDeserializers<DeviceConfiguration>> = Lazy::new(|| {
    let mut fields =
        FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut DeviceConfiguration| &mut m.base);
    fields
        .insert("createdDateTime", |m: &mut DeviceConfiguration, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_created_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("description", |m: &mut DeviceConfiguration, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_description(Some(value))?;
            }
            Ok(())
        })
        .insert("displayName", |m: &mut DeviceConfiguration, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_display_name(Some(value))?;
            }
            Ok(())
        })
        .insert("lastModifiedDateTime", |m: &mut DeviceConfiguration, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_last_modified_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("version", |m: &mut DeviceConfiguration, n| {
            if let Some(value) = n.get_i32_value()? {
                m.set_version(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl DeviceConfiguration {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceConfiguration";

    /// Empty instance tagged `#microsoft.graph.deviceConfiguration`.
    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self {
            base: Entity::with_odata_type(tag),
        }
    }

    /// Build a `windowsUpdateForBusinessConfiguration` when the node is
    /// tagged as one, otherwise a `deviceConfiguration`.
    pub fn create_from_discriminator_value(
        node: &dyn ParseNode,
    ) -> Result<Box<dyn DeviceConfigurationable>, SerializationError> {
        DEVICE_CONFIGURATION_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<DeviceConfiguration> {
        &DEVICE_CONFIGURATION_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time()?.as_ref())?;
        writer.write_string_value(Some("description"), self.description()?.as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name()?.as_deref())?;
        writer.write_date_time_value(Some("lastModifiedDateTime"), self.last_modified_date_time()?.as_ref())?;
        writer.write_i32_value(Some("version"), self.version()?)
    }

    /// When the profile was created.
    pub fn created_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("createdDateTime")
    }

    /// Set the creation time.
    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("createdDateTime", value)
    }

    /// Admin-provided description.
    pub fn description(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("description")
    }

    /// Set the description.
    pub fn set_description(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("description", value)
    }

    /// Admin-provided name.
    pub fn display_name(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("displayName")
    }

    /// Set the name.
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("displayName", value)
    }

    /// When the profile last changed.
    pub fn last_modified_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("lastModifiedDateTime")
    }

    /// Set the last modification time.
    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("lastModifiedDateTime", value)
    }

    /// Profile revision.
    pub fn version(&self) -> Result<Option<i32>, StoreError> {
        self.store().get_value("version")
    }

    /// Set the revision.
    pub fn set_version(&mut self, value: Option<i32>) -> Result<(), StoreError> {
        self.store_mut().set_value("version", value)
    }
}

impl_parsable!(DeviceConfiguration);

impl_able!(DeviceConfigurationable { device_configuration, device_configuration_mut } -> DeviceConfiguration:
    DeviceConfiguration,
    WindowsUpdateForBusinessConfiguration,
);
