// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `teamworkUserIdentity`: a user as seen by Teams.

use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::{Identity, TeamworkUserIdentityType};

/// Identity with the kind of user account attached.
#[derive(Debug)]
pub struct TeamworkUserIdentity {
    base: Identity,
}

derive_base!(TeamworkUserIdentity => Identity);

static TEAMWORK_USER_FIELDS: Lazy<FieldDeserializers<TeamworkUserIdentity>> = Lazy::new(|| {
    let mut fields =
        FieldDeserializers::inherit(Identity::field_deserializers(), |m: &mut TeamworkUserIdentity| &mut m.base);
    fields.insert("userIdentityType", |m: &mut TeamworkUserIdentity, n| {
        if let Some(value) = n.get_enum_value::<TeamworkUserIdentityType>()? {
            m.set_user_identity_type(Some(value))?;
        }
        Ok(())
    });
    fields
});

impl TeamworkUserIdentity {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.teamworkUserIdentity";

    /// Empty instance tagged `#microsoft.graph.teamworkUserIdentity`.
    pub fn new() -> Self {
        Self {
            base: Identity::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `teamworkUserIdentity`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<TeamworkUserIdentity> {
        &TEAMWORK_USER_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_enum_value(Some("userIdentityType"), self.user_identity_type()?)
    }

    /// Kind of account. Values the service added after this model was
    /// generated read as `None`.
    pub fn user_identity_type(&self) -> Result<Option<TeamworkUserIdentityType>, StoreError> {
        self.store().get_enum("userIdentityType")
    }

    /// Set the kind of account.
    pub fn set_user_identity_type(&mut self, value: Option<TeamworkUserIdentityType>) -> Result<(), StoreError> {
        self.store_mut().set_enum("userIdentityType", value)
    }
}

impl_parsable!(TeamworkUserIdentity);
