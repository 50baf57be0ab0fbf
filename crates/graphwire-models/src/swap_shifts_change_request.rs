// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `swapShiftsChangeRequest`: trade shifts with a coworker.

use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::OfferShiftRequest;

/// Offer that asks for the recipient's shift in return.
#[derive(Debug)]
pub struct SwapShiftsChangeRequest {
    base: OfferShiftRequest,
}

derive_base!(SwapShiftsChangeRequest => OfferShiftRequest);

static SWAP_FIELDS: Lazy<FieldDeserializers<SwapShiftsChangeRequest>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        OfferShiftRequest::field_deserializers(),
        |m: &mut SwapShiftsChangeRequest| &mut m.base,
    );
    fields.insert("recipientShiftId", |m: &mut SwapShiftsChangeRequest, n| {
        if let Some(value) = n.get_string_value()? {
            m.set_recipient_shift_id(Some(value))?;
        }
        Ok(())
    });
    fields
});

impl SwapShiftsChangeRequest {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.swapShiftsChangeRequest";

    /// Empty instance tagged `#microsoft.graph.swapShiftsChangeRequest`.
    pub fn new() -> Self {
        Self {
            base: OfferShiftRequest::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `swapShiftsChangeRequest`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<SwapShiftsChangeRequest> {
        &SWAP_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_string_value(Some("recipientShiftId"), self.recipient_shift_id()?.as_deref())
    }

    /// Shift requested in exchange.
    pub fn recipient_shift_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("recipientShiftId")
    }

    /// Set the shift requested in exchange.
    pub fn set_recipient_shift_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("recipientShiftId", value)
    }
}

impl_parsable!(SwapShiftsChangeRequest);
