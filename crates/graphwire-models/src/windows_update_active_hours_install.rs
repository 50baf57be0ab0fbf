// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `windowsUpdateActiveHoursInstall`: install outside active hours.

use chrono::NaiveTime;
use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::WindowsUpdateInstallScheduleType;

/// Install schedule that avoids the user's active hours.
#[derive(Debug)]
pub struct WindowsUpdateActiveHoursInstall {
    base: WindowsUpdateInstallScheduleType,
}

derive_base!(WindowsUpdateActiveHoursInstall => WindowsUpdateInstallScheduleType);

static ACTIVE_HOURS_FIELDS: Lazy<FieldDeserializers<WindowsUpdateActiveHoursInstall>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        WindowsUpdateInstallScheduleType::field_deserializers(),
        |m: &mut WindowsUpdateActiveHoursInstall| &mut m.base,
    );
    fields
        .insert("activeHoursEnd", |m: &mut WindowsUpdateActiveHoursInstall, n| {
            if let Some(value) = n.get_time_only_value()? {
                m.set_active_hours_end(Some(value))?;
            }
            Ok(())
        })
        .insert("activeHoursStart", |m: &mut WindowsUpdateActiveHoursInstall, n| {
            if let Some(value) = n.get_time_only_value()? {
                m.set_active_hours_start(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl WindowsUpdateActiveHoursInstall {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsUpdateActiveHoursInstall";

    /// Empty instance tagged `#microsoft.graph.windowsUpdateActiveHoursInstall`.
    pub fn new() -> Self {
        Self {
            base: WindowsUpdateInstallScheduleType::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `windowsUpdateActiveHoursInstall`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<WindowsUpdateActiveHoursInstall> {
        &ACTIVE_HOURS_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_time_only_value(Some("activeHoursEnd"), self.active_hours_end()?.as_ref())?;
        writer.write_time_only_value(Some("activeHoursStart"), self.active_hours_start()?.as_ref())
    }

    /// End of active hours.
    pub fn active_hours_end(&self) -> Result<Option<NaiveTime>, StoreError> {
        self.store().get_value("activeHoursEnd")
    }

    /// Set the end of active hours.
    pub fn set_active_hours_end(&mut self, value: Option<NaiveTime>) -> Result<(), StoreError> {
        self.store_mut().set_value("activeHoursEnd", value)
    }

    /// Start of active hours.
    pub fn active_hours_start(&self) -> Result<Option<NaiveTime>, StoreError> {
        self.store().get_value("activeHoursStart")
    }

    /// Set the start of active hours.
    pub fn set_active_hours_start(&mut self, value: Option<NaiveTime>) -> Result<(), StoreError> {
        self.store_mut().set_value("activeHoursStart", value)
    }
}

impl_parsable!(WindowsUpdateActiveHoursInstall);
