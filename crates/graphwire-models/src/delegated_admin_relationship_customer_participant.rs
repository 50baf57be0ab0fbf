// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `delegatedAdminRelationshipCustomerParticipant`: the customer side of a
//! relationship.

use graphwire_abstractions::{
    BackingStore, FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError, ODATA_TYPE,
};
use once_cell::sync::Lazy;

/// Customer tenant named in a delegated admin relationship.
#[derive(Debug)]
pub struct DelegatedAdminRelationshipCustomerParticipant {
    backing_store: Box<dyn BackingStore>,
}

root_store!(DelegatedAdminRelationshipCustomerParticipant);

static CUSTOMER_FIELDS: Lazy<FieldDeserializers<DelegatedAdminRelationshipCustomerParticipant>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::new();
    fields
        .insert("displayName", |m: &mut DelegatedAdminRelationshipCustomerParticipant, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_display_name(Some(value))?;
            }
            Ok(())
        })
        .insert(ODATA_TYPE, |m: &mut DelegatedAdminRelationshipCustomerParticipant, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_odata_type(Some(value))?;
            }
            Ok(())
        })
        .insert("tenantId", |m: &mut DelegatedAdminRelationshipCustomerParticipant, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_tenant_id(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl DelegatedAdminRelationshipCustomerParticipant {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.delegatedAdminRelationshipCustomerParticipant";

    /// Empty instance tagged with [`Self::ODATA_TYPE`].
    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    /// No known subtypes.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<DelegatedAdminRelationshipCustomerParticipant> {
        &CUSTOMER_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(Some("displayName"), self.display_name()?.as_deref())?;
        writer.write_string_value(Some(ODATA_TYPE), self.odata_type()?.as_deref())?;
        writer.write_string_value(Some("tenantId"), self.tenant_id()?.as_deref())?;
        writer.write_additional_data(self.additional_data()?.as_ref())
    }

    /// Customer's display name, as of the last tenant sync.
    pub fn display_name(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("displayName")
    }

    /// Set the display name.
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("displayName", value)
    }

    /// Customer tenant id.
    pub fn tenant_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("tenantId")
    }

    /// Set the tenant id.
    pub fn set_tenant_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("tenantId", value)
    }
}

impl_parsable!(DelegatedAdminRelationshipCustomerParticipant);
