// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `windowsUpdateForBusinessConfiguration`: Windows Update for Business ring.

use chrono::{DateTime, FixedOffset, NaiveDate};
use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::{
    AutomaticUpdateMode, DeviceConfiguration, Enablement, WindowsUpdateForBusinessUpdateWeeks,
    WindowsUpdateInstallScheduleType, WindowsUpdateInstallScheduleTypeable,
};

/// Update ring: deferrals, pauses, deadlines and the install schedule.
#[derive(Debug)]
pub struct WindowsUpdateForBusinessConfiguration {
    base: DeviceConfiguration,
}

derive_base!(WindowsUpdateForBusinessConfiguration => DeviceConfiguration);

static UPDATE_RING_FIELDS: Lazy<FieldDeserializers<WindowsUpdateForBusinessConfiguration>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        DeviceConfiguration::field_deserializers(),
        |m: &mut WindowsUpdateForBusinessConfiguration| &mut m.base,
    );
    fields
        .insert("automaticUpdateMode", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_enum_value::<AutomaticUpdateMode>()? {
                m.set_automatic_update_mode(Some(value))?;
            }
            Ok(())
        })
        .insert("deadlineForFeatureUpdatesInDays", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_i32_value()? {
                m.set_deadline_for_feature_updates_in_days(Some(value))?;
            }
            Ok(())
        })
        .insert("featureUpdatesPaused", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_feature_updates_paused(Some(value))?;
            }
            Ok(())
        })
        .insert("featureUpdatesPauseExpiryDateTime", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_feature_updates_pause_expiry_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("featureUpdatesPauseStartDate", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_date_only_value()? {
                m.set_feature_updates_pause_start_date(Some(value))?;
            }
            Ok(())
        })
        .insert("installationSchedule", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) =
                n.get_object_value(WindowsUpdateInstallScheduleType::create_from_discriminator_value)?
            {
                m.set_installation_schedule(Some(value))?;
            }
            Ok(())
        })
        .insert("qualityUpdatesDeferralPeriodInDays", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_i32_value()? {
                m.set_quality_updates_deferral_period_in_days(Some(value))?;
            }
            Ok(())
        })
        .insert("scheduleImminentRestartWarningInMinutes", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_i32_value()? {
                m.set_schedule_imminent_restart_warning_in_minutes(Some(value))?;
            }
            Ok(())
        })
        .insert("updateWeeks", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_enum_value::<WindowsUpdateForBusinessUpdateWeeks>()? {
                m.set_update_weeks(Some(value))?;
            }
            Ok(())
        })
        .insert("userPauseAccess", |m: &mut WindowsUpdateForBusinessConfiguration, n| {
            if let Some(value) = n.get_enum_value::<Enablement>()? {
                m.set_user_pause_access(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl WindowsUpdateForBusinessConfiguration {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsUpdateForBusinessConfiguration";

    /// Empty instance tagged `#microsoft.graph.windowsUpdateForBusinessConfiguration`.
    pub fn new() -> Self {
        Self {
            base: DeviceConfiguration::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `windowsUpdateForBusinessConfiguration`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<WindowsUpdateForBusinessConfiguration> {
        &UPDATE_RING_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_enum_value(Some("automaticUpdateMode"), self.automatic_update_mode()?)?;
        writer.write_i32_value(
            Some("deadlineForFeatureUpdatesInDays"),
            self.deadline_for_feature_updates_in_days()?,
        )?;
        writer.write_bool_value(Some("featureUpdatesPaused"), self.feature_updates_paused()?)?;
        writer.write_date_time_value(
            Some("featureUpdatesPauseExpiryDateTime"),
            self.feature_updates_pause_expiry_date_time()?.as_ref(),
        )?;
        writer.write_date_only_value(
            Some("featureUpdatesPauseStartDate"),
            self.feature_updates_pause_start_date()?.as_ref(),
        )?;
        writer.write_object_value(Some("installationSchedule"), self.installation_schedule()?)?;
        writer.write_i32_value(
            Some("qualityUpdatesDeferralPeriodInDays"),
            self.quality_updates_deferral_period_in_days()?,
        )?;
        writer.write_i32_value(
            Some("scheduleImminentRestartWarningInMinutes"),
            self.schedule_imminent_restart_warning_in_minutes()?,
        )?;
        writer.write_enum_value(Some("updateWeeks"), self.update_weeks()?)?;
        writer.write_enum_value(Some("userPauseAccess"), self.user_pause_access()?)
    }

    /// How updates are downloaded and installed.
    pub fn automatic_update_mode(&self) -> Result<Option<AutomaticUpdateMode>, StoreError> {
        self.store().get_enum("automaticUpdateMode")
    }

    /// Set the update mode.
    pub fn set_automatic_update_mode(&mut self, value: Option<AutomaticUpdateMode>) -> Result<(), StoreError> {
        self.store_mut().set_enum("automaticUpdateMode", value)
    }

    /// Days before feature updates are installed automatically (2..=30).
    pub fn deadline_for_feature_updates_in_days(&self) -> Result<Option<i32>, StoreError> {
        self.store().get_value("deadlineForFeatureUpdatesInDays")
    }

    /// Set the feature update deadline.
    pub fn set_deadline_for_feature_updates_in_days(&mut self, value: Option<i32>) -> Result<(), StoreError> {
        self.store_mut().set_value("deadlineForFeatureUpdatesInDays", value)
    }

    /// Whether feature updates are paused.
    pub fn feature_updates_paused(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("featureUpdatesPaused")
    }

    /// Pause or resume feature updates.
    pub fn set_feature_updates_paused(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("featureUpdatesPaused", value)
    }

    /// When the feature update pause ends.
    pub fn feature_updates_pause_expiry_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("featureUpdatesPauseExpiryDateTime")
    }

    /// Set when the pause ends.
    pub fn set_feature_updates_pause_expiry_date_time(
        &mut self,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), StoreError> {
        self.store_mut().set_value("featureUpdatesPauseExpiryDateTime", value)
    }

    /// First day of the feature update pause.
    pub fn feature_updates_pause_start_date(&self) -> Result<Option<NaiveDate>, StoreError> {
        self.store().get_value("featureUpdatesPauseStartDate")
    }

    /// Set the first day of the pause.
    pub fn set_feature_updates_pause_start_date(&mut self, value: Option<NaiveDate>) -> Result<(), StoreError> {
        self.store_mut().set_value("featureUpdatesPauseStartDate", value)
    }

    /// When installs may happen.
    pub fn installation_schedule(&self) -> Result<Option<&dyn WindowsUpdateInstallScheduleTypeable>, StoreError> {
        Ok(self
            .store()
            .get_object::<Box<dyn WindowsUpdateInstallScheduleTypeable>>("installationSchedule")?
            .map(|v| &**v))
    }

    /// Set the install schedule.
    pub fn set_installation_schedule(
        &mut self,
        value: Option<Box<dyn WindowsUpdateInstallScheduleTypeable>>,
    ) -> Result<(), StoreError> {
        self.store_mut().set_object("installationSchedule", value)
    }

    /// Days quality updates are deferred.
    pub fn quality_updates_deferral_period_in_days(&self) -> Result<Option<i32>, StoreError> {
        self.store().get_value("qualityUpdatesDeferralPeriodInDays")
    }

    /// Set the quality update deferral.
    pub fn set_quality_updates_deferral_period_in_days(&mut self, value: Option<i32>) -> Result<(), StoreError> {
        self.store_mut().set_value("qualityUpdatesDeferralPeriodInDays", value)
    }

    /// Minutes of warning before an imminent restart.
    pub fn schedule_imminent_restart_warning_in_minutes(&self) -> Result<Option<i32>, StoreError> {
        self.store().get_value("scheduleImminentRestartWarningInMinutes")
    }

    /// Set the restart warning.
    pub fn set_schedule_imminent_restart_warning_in_minutes(&mut self, value: Option<i32>) -> Result<(), StoreError> {
        self.store_mut().set_value("scheduleImminentRestartWarningInMinutes", value)
    }

    /// Weeks of the month updates may install in.
    pub fn update_weeks(&self) -> Result<Option<WindowsUpdateForBusinessUpdateWeeks>, StoreError> {
        self.store().get_enum("updateWeeks")
    }

    /// Set the install weeks.
    pub fn set_update_weeks(&mut self, value: Option<WindowsUpdateForBusinessUpdateWeeks>) -> Result<(), StoreError> {
        self.store_mut().set_enum("updateWeeks", value)
    }

    /// Whether users may pause updates themselves.
    pub fn user_pause_access(&self) -> Result<Option<Enablement>, StoreError> {
        self.store().get_enum("userPauseAccess")
    }

    /// Allow or forbid user pauses.
    pub fn set_user_pause_access(&mut self, value: Option<Enablement>) -> Result<(), StoreError> {
        self.store_mut().set_enum("userPauseAccess", value)
    }
}

impl_parsable!(WindowsUpdateForBusinessConfiguration);
