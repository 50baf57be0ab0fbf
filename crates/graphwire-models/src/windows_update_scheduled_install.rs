// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `windowsUpdateScheduledInstall`: install on a fixed day and time.

use chrono::NaiveTime;
use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::{WeeklySchedule, WindowsUpdateInstallScheduleType};

/// Install schedule pinned to a weekday and a time of day.
#[derive(Debug)]
pub struct WindowsUpdateScheduledInstall {
    base: WindowsUpdateInstallScheduleType,
}

derive_base!(WindowsUpdateScheduledInstall => WindowsUpdateInstallScheduleType);

static SCHEDULED_INSTALL_FIELDS: Lazy<FieldDeserializers<WindowsUpdateScheduledInstall>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        WindowsUpdateInstallScheduleType::field_deserializers(),
        |m: &mut WindowsUpdateScheduledInstall| &mut m.base,
    );
    fields
        .insert("scheduledInstallDay", |m: &mut WindowsUpdateScheduledInstall, n| {
            if let Some(value) = n.get_enum_value::<WeeklySchedule>()? {
                m.set_scheduled_install_day(Some(value))?;
            }
            Ok(())
        })
        .insert("scheduledInstallTime", |m: &mut WindowsUpdateScheduledInstall, n| {
            if let Some(value) = n.get_time_only_value()? {
                m.set_scheduled_install_time(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl WindowsUpdateScheduledInstall {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsUpdateScheduledInstall";

    /// Empty instance tagged `#microsoft.graph.windowsUpdateScheduledInstall`.
    pub fn new() -> Self {
        Self {
            base: WindowsUpdateInstallScheduleType::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `windowsUpdateScheduledInstall`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<WindowsUpdateScheduledInstall> {
        &SCHEDULED_INSTALL_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_enum_value(Some("scheduledInstallDay"), self.scheduled_install_day()?)?;
        writer.write_time_only_value(Some("scheduledInstallTime"), self.scheduled_install_time()?.as_ref())
    }

    /// Day (or every day) to install on.
    pub fn scheduled_install_day(&self) -> Result<Option<WeeklySchedule>, StoreError> {
        self.store().get_enum("scheduledInstallDay")
    }

    /// Set the install day.
    pub fn set_scheduled_install_day(&mut self, value: Option<WeeklySchedule>) -> Result<(), StoreError> {
        self.store_mut().set_enum("scheduledInstallDay", value)
    }

    /// Local time to install at.
    pub fn scheduled_install_time(&self) -> Result<Option<NaiveTime>, StoreError> {
        self.store().get_value("scheduledInstallTime")
    }

    /// Set the install time.
    pub fn set_scheduled_install_time(&mut self, value: Option<NaiveTime>) -> Result<(), StoreError> {
        self.store_mut().set_value("scheduledInstallTime", value)
    }
}

impl_parsable!(WindowsUpdateScheduledInstall);
