// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `timeOffRequest`.

use chrono::{DateTime, FixedOffset};
use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::ScheduleChangeRequest;

/// Request for time off between two instants.
#[derive(Debug)]
pub struct TimeOffRequest {
    base: ScheduleChangeRequest,
}

derive_base!(TimeOffRequest => ScheduleChangeRequest);

static TIME_OFF_FIELDS: Lazy<FieldDeserializers<TimeOffRequest>> = Lazy::new(|| {
    let mut fields =
        FieldDeserializers::inherit(ScheduleChangeRequest::field_deserializers(), |m: &mut TimeOffRequest| {
            &mut m.base
        });
    fields
        .insert("endDateTime", |m: &mut TimeOffRequest, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_end_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("startDateTime", |m: &mut TimeOffRequest, n| {
            if let Some(value) = n.get_date_time_value()? {
                m.set_start_date_time(Some(value))?;
            }
            Ok(())
        })
        .insert("timeOffReasonId", |m: &mut TimeOffRequest, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_time_off_reason_id(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl TimeOffRequest {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.timeOffRequest";

    /// Empty instance tagged `#microsoft.graph.timeOffRequest`.
    pub fn new() -> Self {
        Self {
            base: ScheduleChangeRequest::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `timeOffRequest`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<TimeOffRequest> {
        &TIME_OFF_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_date_time_value(Some("endDateTime"), self.end_date_time()?.as_ref())?;
        writer.write_date_time_value(Some("startDateTime"), self.start_date_time()?.as_ref())?;
        writer.write_string_value(Some("timeOffReasonId"), self.time_off_reason_id()?.as_deref())
    }

    /// End of the requested time off.
    pub fn end_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("endDateTime")
    }

    /// Set the end of the requested time off.
    pub fn set_end_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("endDateTime", value)
    }

    /// Start of the requested time off.
    pub fn start_date_time(&self) -> Result<Option<DateTime<FixedOffset>>, StoreError> {
        self.store().get_value("startDateTime")
    }

    /// Set the start of the requested time off.
    pub fn set_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) -> Result<(), StoreError> {
        self.store_mut().set_value("startDateTime", value)
    }

    /// Reason code defined on the schedule.
    pub fn time_off_reason_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("timeOffReasonId")
    }

    /// Set the reason code.
    pub fn set_time_off_reason_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("timeOffReasonId", value)
    }
}

impl_parsable!(TimeOffRequest);
