// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `schedulingGroup`: a named set of users within a schedule.

use graphwire_abstractions::{FieldDeserializers, ParseNode, SerializationError, SerializationWriter, StoreError};
use once_cell::sync::Lazy;

use crate::ChangeTrackedEntity;

/// Group of users scheduled together, e.g. a department or a role.
#[derive(Debug)]
pub struct SchedulingGroup {
    base: ChangeTrackedEntity,
}

derive_base!(SchedulingGroup => ChangeTrackedEntity);

static GROUP_FIELDS: Lazy<FieldDeserializers<SchedulingGroup>> = Lazy::new(|| {
    let mut fields =
        FieldDeserializers::inherit(ChangeTrackedEntity::field_deserializers(), |m: &mut SchedulingGroup| {
            &mut m.base
        });
    fields
        .insert("displayName", |m: &mut SchedulingGroup, n| {
            if let Some(value) = n.get_string_value()? {
                m.set_display_name(Some(value))?;
            }
            Ok(())
        })
        .insert("isActive", |m: &mut SchedulingGroup, n| {
            if let Some(value) = n.get_bool_value()? {
                m.set_is_active(Some(value))?;
            }
            Ok(())
        })
        .insert("userIds", |m: &mut SchedulingGroup, n| {
            if let Some(value) = n.get_collection_of_primitive_values::<String>()? {
                m.set_user_ids(Some(value))?;
            }
            Ok(())
        });
    fields
});

impl SchedulingGroup {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.schedulingGroup";

    /// Empty instance tagged `#microsoft.graph.schedulingGroup`.
    pub fn new() -> Self {
        Self {
            base: ChangeTrackedEntity::with_odata_type(Self::ODATA_TYPE),
        }
    }

    /// Leaf type: always a `schedulingGroup`.
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<Self>, SerializationError> {
        Ok(Box::new(Self::new()))
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<SchedulingGroup> {
        &GROUP_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_string_value(Some("displayName"), self.display_name()?.as_deref())?;
        writer.write_bool_value(Some("isActive"), self.is_active()?)?;
        writer.write_collection_of_primitive_values(Some("userIds"), self.user_ids()?.as_deref())
    }

    /// Group name.
    pub fn display_name(&self) -> Result<Option<String>, StoreError> {
        self.store().get_value("displayName")
    }

    /// Set the group name.
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.store_mut().set_value("displayName", value)
    }

    /// Whether the group can still be used in shifts.
    pub fn is_active(&self) -> Result<Option<bool>, StoreError> {
        self.store().get_value("isActive")
    }

    /// Set whether the group is active.
    pub fn set_is_active(&mut self, value: Option<bool>) -> Result<(), StoreError> {
        self.store_mut().set_value("isActive", value)
    }

    /// Members of the group, in wire order.
    pub fn user_ids(&self) -> Result<Option<Vec<String>>, StoreError> {
        self.store().get_value("userIds")
    }

    /// Replace the members.
    pub fn set_user_ids(&mut self, value: Option<Vec<String>>) -> Result<(), StoreError> {
        self.store_mut().set_value("userIds", value)
    }
}

impl_parsable!(SchedulingGroup);
