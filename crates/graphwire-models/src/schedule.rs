// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `schedule`: a team's shifts settings and pending requests.

use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::{
    Entity, OfferShiftRequest, OfferShiftRequestable, OpenShiftChangeRequest, OperationStatus, SchedulingGroup,
    SwapShiftsChangeRequest, TimeOffRequest,
};

/// Shifts schedule of a team.
#[derive(Debug)]
pub struct Schedule {
    base: Entity,
}

derive_base!(Schedule => Entity);

static SCHEDULE_FIELDS: Lazy<FieldDeserializers<Schedule>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Schedule| &mut m.base);
    fields
        .insert("enabled", |m: &mut Schedule, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_enabled(Some(value))?;
            }
            Ok(())
        })
        .insert("offerShiftRequests", |m: &mut Schedule, n| {
            if let Some(value) = n.get_collection_of_object_values(OfferShiftRequest::create_from_discriminator_value)? {
                m.set_offer_shift_requests(Some(value))?;
            }
            Ok(())
        })
        .insert("offerShiftRequestsEnabled", |m: &mut Schedule, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_offer_shift_requests_enabled(Some(value))?;
            }
            Ok(())
        })
        .insert("openShiftChangeRequests", |m: &mut Schedule, n| {
            if let Some(value) =
                n.get_collection_of_object_values(OpenShiftChangeRequest::create_from_discriminator_value)?
            {
                m.set_open_shift_change_requests(Some(value))?;
            }
            Ok(())
        })
        .insert("openShiftsEnabled", |m: &mut Schedule, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_open_shifts_enabled(Some(value))?;
            }
            Ok(())
        })
        .insert("provisionStatus", |m: &mut Schedule, n| {
            if let Some(value) = n.get_enum_value::<OperationStatus>()? {
                m.set_provision_status(Some(value))?;
            }
            Ok(())
        })
        .insert("provisionStatusCode", |m: &mut Schedule, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_provision_status_code(Some(value))?;
            }
            Ok(())
        })
        .insert("schedulingGroups", |m: &mut Schedule, n| {
            if let Some(value) = n.get_collection_of_object_values(SchedulingGroup::create_from_discriminator_value)? {
                m.set_scheduling_groups(Some(value))?;
            }
            Ok(())
        })
        .insert("swapShiftsChangeRequests", |m: &mut Schedule, n| {
            if let Some(value) =
                n.get_collection_of_object_values(SwapShiftsChangeRequest::create_from_discriminator_value)?
            {
                m.set_swap_shifts_change_requests(Some(value))?;
            }
            Ok(())
        })
        .insert("swapShiftsRequestsEnabled", |m: &mut Schedule, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_swap_shifts_requests_enabled(Some(value))?;
            }
            Ok(())
        })
        .insert("timeClockEnabled", |m: &mut Schedule, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_time_clock_enabled(Some(value))?;
            }
            Ok(())
        })
        .insert("timeOffRequests", |m: &mut Schedule, n| {
            if let Some(value) = n.get_collection_of_object_values(TimeOffRequest::create_from_discriminator_value)? {
                m.set_time_off_requests(Some(value))?;
            }
            Ok(())
        })
        .insert("timeOffRequestsEnabled", |m: &mut Schedule, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_time_off_requests_enabled(Some(value))?;
            }
            Ok(())
        })
        .insert("timeZone", |m: &mut Schedule, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_time_zone(Some(value))?;
            }
            Ok(())
        })
        .insert("workforceIntegrationIds", |m: &mut Schedule, n| {
            if let Some(value) = n.get_collection_of_primitive_values::<String>()? {
                m.set_workforce_integration_ids(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl Schedule {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.schedule";

    /// Empty instance tagged `#microsoft.graph.schedule`.
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `schedule`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<Schedule> {
        &SCHEDULE_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_bool_value(Some("enabled"), self.enabled()?)?;
        writer.write_collection_of_object_values(Some("offerShiftRequests"), self.offer_shift_requests()?)?;
        writer.write_bool_value(Some("offerShiftRequestsEnabled"), self.offer_shift_requests_enabled()?)?;
        writer.write_collection_of_object_values(Some("openShiftChangeRequests"), self.open_shift_change_requests()?)?;
        writer.write_bool_value(Some("openShiftsEnabled"), self.open_shifts_enabled()?)?;
        writer.write_enum_value(Some("provisionStatus"), self.provision_status()?)?;
        writer.write_string_value(Some("provisionStatusCode"), self.provision_status_code()?.as_deref())?;
        writer.write_collection_of_object_values(Some("schedulingGroups"), self.scheduling_groups()?)?;
        writer.write_collection_of_object_values(Some("swapShiftsChangeRequests"), self.swap_shifts_change_requests()?)?;
        writer.write_bool_value(Some("swapShiftsRequestsEnabled"), self.swap_shifts_requests_enabled()?)?;
        writer.write_bool_value(Some("timeClockEnabled"), self.time_clock_enabled()?)?;
        writer.write_collection_of_object_values(Some("timeOffRequests"), self.time_off_requests()?)?;
        writer.write_bool_value(Some("timeOffRequestsEnabled"), self.time_off_requests_enabled()?)?;
        writer.write_string_value(Some("timeZone"), self.time_zone()?.as_deref())?;
        writer.write_collection_of_primitive_values(
            Some("workforceIntegrationIds"),
            self.workforce_integration_ids()?.as_deref(),
        )
    }

    fn objects<T: 'static + ?Sized + Send + Sync>(&self, key: &str) -> Result<Option<&[Box<T>]>, StoreError> {
        Ok(self.store().get_object::<Vec<Box<T>>>(key)?.map(Vec::as_slice))
    }

    /// Whether the schedule is enabled for the team.
    pub fn enabled(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("enabled")
    }

    /// Enable or disable the schedule.
    pub fn set_enabled(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("enabled", value)
    }

    /// Offer (and swap) requests, each built through the `offerShiftRequest`
    /// factory.
    pub fn offer_shift_requests(&self) -> Result<Option<&[Box<dyn OfferShiftRequestable>]>, StoreError> {
        self.objects("offerShiftRequests")
    }

    /// Replace the offer requests.
    pub fn set_offer_shift_requests(
        &mut self,
        value: Option<Vec<Box<dyn OfferShiftRequestable>>>,
    ) -> Result<(), StoreError> {
        self.store_mut().set_object("offerShiftRequests", value)
    }

    /// Whether offer requests are allowed.
    pub fn offer_shift_requests_enabled(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("offerShiftRequestsEnabled")
    }

    /// Allow or forbid offer requests.
    pub fn set_offer_shift_requests_enabled(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("offerShiftRequestsEnabled", value)
    }

    /// Requests for open shifts.
    pub fn open_shift_change_requests(&self) -> Result<Option<&[Box<OpenShiftChangeRequest>]>, StoreError> {
        self.objects("openShiftChangeRequests")
    }

    /// Replace the open shift requests.
    pub fn set_open_shift_change_requests(
        &mut self,
        value: Option<Vec<Box<OpenShiftChangeRequest>>>,
    ) -> Result<(), StoreError> {
        self.store_mut().set_object("openShiftChangeRequests", value)
    }

    /// Whether open shifts are allowed.
    pub fn open_shifts_enabled(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("openShiftsEnabled")
    }

    /// Allow or forbid open shifts.
    pub fn set_open_shifts_enabled(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("openShiftsEnabled", value)
    }

    /// Provisioning progress.
    pub fn provision_status(&self) -> Result<Option<OperationStatus>, StoreError> {
        self.store().get_enum("provisionStatus")
    }

    /// Set the provisioning progress.
    pub fn set_provision_status(&mut self, value: Option<OperationStatus>) -> Result<(), StoreError> {
        self.store_mut().set_enum("provisionStatus", value)
    }

    /// Extra provisioning detail, e.g. a failure code.
    pub fn provision_status_code(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("provisionStatusCode")
    }

    /// Set the provisioning detail.
    pub fn set_provision_status_code(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("provisionStatusCode", value)
    }

    /// Groups defined on the schedule.
    pub fn scheduling_groups(&self) -> Result<Option<&[Box<SchedulingGroup>]>, StoreError> {
        self.objects("schedulingGroups")
    }

    /// Replace the groups.
    pub fn set_scheduling_groups(&mut self, value: Option<Vec<Box<SchedulingGroup>>>) -> Result<(), StoreError> {
        self.store_mut().set_object("schedulingGroups", value)
    }

    /// Swap requests.
    pub fn swap_shifts_change_requests(&self) -> Result<Option<&[Box<SwapShiftsChangeRequest>]>, StoreError> {
        self.objects("swapShiftsChangeRequests")
    }

    /// Replace the swap requests.
    pub fn set_swap_shifts_change_requests(
        &mut self,
        value: Option<Vec<Box<SwapShiftsChangeRequest>>>,
    ) -> Result<(), StoreError> {
        self.store_mut().set_object("swapShiftsChangeRequests", value)
    }

    /// Whether swap requests are allowed.
    pub fn swap_shifts_requests_enabled(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("swapShiftsRequestsEnabled")
    }

    /// Allow or forbid swap requests.
    pub fn set_swap_shifts_requests_enabled(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("swapShiftsRequestsEnabled", value)
    }

    /// Whether the time clock is on.
    pub fn time_clock_enabled(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("timeClockEnabled")
    }

    /// Turn the time clock on or off.
    pub fn set_time_clock_enabled(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("timeClockEnabled", value)
    }

    /// Time-off requests.
    pub fn time_off_requests(&self) -> Result<Option<&[Box<TimeOffRequest>]>, StoreError> {
        self.objects("timeOffRequests")
    }

    /// Replace the time-off requests.
    pub fn set_time_off_requests(&mut self, value: Option<Vec<Box<TimeOffRequest>>>) -> Result<(), StoreError> {
        self.store_mut().set_object("timeOffRequests", value)
    }

    /// Whether time-off requests are allowed.
    pub fn time_off_requests_enabled(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("timeOffRequestsEnabled")
    }

    /// Allow or forbid time-off requests.
    pub fn set_time_off_requests_enabled(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("timeOffRequestsEnabled", value)
    }

    /// IANA time zone of the schedule, e.g. `America/Chicago`.
    pub fn time_zone(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("timeZone")
    }

    /// Set the time zone.
    pub fn set_time_zone(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("timeZone", value)
    }

    /// Workforce integrations synced with this schedule.
    pub fn workforce_integration_ids(&self) -> Result<Option<Vec<String>>, StoreError> {
        self.store().get_value("workforceIntegrationIds")
    }

    /// Replace the workforce integration ids.
    pub fn set_workforce_integration_ids(&mut self, value: Option<Vec<String>>) -> Result<(), StoreError> {
        self.store_mut().set_value("workforceIntegrationIds", value)
    }
}

impl_parsable!(Schedule);
