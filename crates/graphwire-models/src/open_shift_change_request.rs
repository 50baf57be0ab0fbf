// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `openShiftChangeRequest`: claim an unassigned shift.

use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::ScheduleChangeRequest;

/// Request to be assigned an open shift.
#[derive(Debug)]
pub struct OpenShiftChangeRequest {
    base: ScheduleChangeRequest,
}

derive_base!(OpenShiftChangeRequest => ScheduleChangeRequest);

static OPEN_SHIFT_FIELDS: Lazy<FieldDeserializers<OpenShiftChangeRequest>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        ScheduleChangeRequest::field_deserializers(),
        |m: &mut OpenShiftChangeRequest| &mut m.base,
    );
    fields.insert("openShiftId", |m: &mut OpenShiftChangeRequest, n| {
        if let Some(value) = n.get_string_value()? {
            m.set_open_shift_id(Some(value))?;
        }
        Ok(())
    });
    fields
});

impl OpenShiftChangeRequest {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.openShiftChangeRequest";

    /// Empty instance tagged `#microsoft.graph.openShiftChangeRequest`.
    pub fn new() -> Self {
        Self {
            base: ScheduleChangeRequest::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always an `openShiftChangeRequest`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<OpenShiftChangeRequest> {
        &OPEN_SHIFT_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_string_value(Some("openShiftId"), self.open_shift_id()?.as_deref())
    }

    /// Open shift being claimed.
    pub fn open_shift_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("openShiftId")
    }

    /// Set the open shift being claimed.
    pub fn set_open_shift_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("openShiftId", value)
    }
}

impl_parsable!(OpenShiftChangeRequest);
