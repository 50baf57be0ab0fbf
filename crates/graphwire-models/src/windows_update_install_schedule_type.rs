// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `windowsUpdateInstallScheduleType`: when updates may be installed.

use graphwire_abstractions::{
    BackingStore, DiscriminatorRegistry, FieldDeserializers, ParseNode, SerializationError, SerializationWriter,
    ODATA_TYPE,
};
use once_cell::sync::Lazy;

use crate::{Parsable, WindowsUpdateActiveHoursInstall, WindowsUpdateScheduledInstall};

/// Capability of `windowsUpdateInstallScheduleType` and its descendants.
pub trait WindowsUpdateInstallScheduleTypeable: Parsable {
    /// The embedded `windowsUpdateInstallScheduleType` part.
    fn windows_update_install_schedule_type(&self) -> &WindowsUpdateInstallScheduleType;

    /// Mutable access to the embedded `windowsUpdateInstallScheduleType` part.
    fn windows_update_install_schedule_type_mut(&mut self) -> &mut WindowsUpdateInstallScheduleType;
}

/// Abstract install schedule. Payloads carry one of the concrete kinds.
#[derive(Debug)]
pub struct WindowsUpdateInstallScheduleType {
    backing_store: Box<dyn BackingStore>,
}

root_store!(WindowsUpdateInstallScheduleType);

static INSTALL_SCHEDULE_SUBTYPES: Lazy<DiscriminatorRegistry<dyn WindowsUpdateInstallScheduleTypeable>> =
    Lazy::new(|| {
        DiscriminatorRegistry::<dyn WindowsUpdateInstallScheduleTypeable>::new(
            WindowsUpdateInstallScheduleType::ODATA_TYPE,
            || Box::new(WindowsUpdateInstallScheduleType::new()),
        )
        .with_subtype(WindowsUpdateActiveHoursInstall::ODATA_TYPE, || {
            Box::new(WindowsUpdateActiveHoursInstall::new())
        })
        .with_subtype(WindowsUpdateScheduledInstall::ODATA_TYPE, || {
            Box::new(WindowsUpdateScheduledInstall::new())
        })
    });

static INSTALL_SCHEDULE_FIELDS: Lazy<FieldDeserializers<WindowsUpdateInstallScheduleType>> = Lazy::new(|| {
    let mut fields = FieldDeserializers::new();
    fields.insert(ODATA_TYPE, |m: &mut WindowsUpdateInstallScheduleType, n| {
        if let Some(value) = n.get_string_value()? {
            m.set_odata_type(Some(value))?;
        }
        Ok(())
    });
    fields
});

impl WindowsUpdateInstallScheduleType {
    /// Discriminator tag.
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsUpdateInstallScheduleType";

    /// Empty instance tagged `#microsoft.graph.windowsUpdateInstallScheduleType`.
    pub fn new() -> Self {
        Self::tagged(Self::ODATA_TYPE)
    }

    pub(crate) fn with_odata_type(tag: &'static str) -> Self {
        Self::tagged(tag)
    }

    /// Build the schedule kind named by `@odata.type`, or the abstract base.
    pub fn create_from_discriminator_value(
        node: &dyn ParseNode,
    ) -> Result<Box<dyn WindowsUpdateInstallScheduleTypeable>, SerializationError> {
        INSTALL_SCHEDULE_SUBTYPES.create(node)
    }

    /// Wire field deserializers.
    pub fn field_deserializers() -> &'static FieldDeserializers<WindowsUpdateInstallScheduleType> {
        &INSTALL_SCHEDULE_FIELDS
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(Some(ODATA_TYPE), self.odata_type()?.as_deref())?;
        writer.write_additional_data(self.additional_data()?.as_ref())
    }
}

impl_parsable!(WindowsUpdateInstallScheduleType);

impl_able!(WindowsUpdateInstallScheduleTypeable {
    windows_update_install_schedule_type,
    windows_update_install_schedule_type_mut
} -> WindowsUpdateInstallScheduleType:
    WindowsUpdateInstallScheduleType,
    WindowsUpdateActiveHoursInstall,
    WindowsUpdateScheduledInstall,
);
