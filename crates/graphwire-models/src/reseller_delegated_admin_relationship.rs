// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `resellerDelegatedAdminRelationship`: a relationship created through an
//! indirect reseller.

use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::DelegatedAdminRelationship;

/// Relationship requested by an indirect reseller on behalf of its provider.
#[derive(Debug)]
pub struct ResellerDelegatedAdminRelationship {
    base: DelegatedAdminRelationship,
}

derive_base!(ResellerDelegatedAdminRelationship => DelegatedAdminRelationship);

static RESELLER_FIELDS: Lazy<FieldDeserializers<ResellerDelegatedAdminRelationship>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::inherit(
        DelegatedAdminRelationship::field_deserializers(),
        |m: &mut ResellerDelegatedAdminRelationship| &mut m.base,
    );
    fields
        .insert("indirectProviderTenantId", |m: &mut ResellerDelegatedAdminRelationship, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_indirect_provider_tenant_id(Some(value))?;
            }
            Ok(())
        })
        .insert("isPartnerConsentPending", |m: &mut ResellerDelegatedAdminRelationship, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_is_partner_consent_pending(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl ResellerDelegatedAdminRelationship {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.resellerDelegatedAdminRelationship";

    /// Empty instance tagged `#microsoft.graph.resellerDelegatedAdminRelationship`.
    pub fn new() -> Self {
        Self {
            base: DelegatedAdminRelationship::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `resellerDelegatedAdminRelationship`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<ResellerDelegatedAdminRelationship> {
        &RESELLER_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_string_value(Some("indirectProviderTenantId"), self.indirect_provider_tenant_id()?.as_deref())?;
        writer.write_bool_value(Some("isPartnerConsentPending"), self.is_partner_consent_pending()?)
    }

    /// Tenant of the indirect provider.
    pub fn indirect_provider_tenant_id(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("indirectProviderTenantId")
    }

    /// Set the indirect provider.
    pub fn set_indirect_provider_tenant_id(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("indirectProviderTenantId", value)
    }

    /// Whether the indirect provider still has to consent.
    pub fn is_partner_consent_pending(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("isPartnerConsentPending")
    }

    /// Set the pending-consent flag.
    pub fn set_is_partner_consent_pending(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("isPartnerConsentPending", value)
    }
}

impl_parsable!(ResellerDelegatedAdminRelationship);
