// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! graphwire-models: Microsoft Graph model types on a backing store.
//!
//! Every type keeps its properties in the backing store of its family root
//! and embeds its base type, reachable through `Deref`. Derived types
//! serialize their base's fields first. Family bases pick the concrete type
//! from `@odata.type` in `create_from_discriminator_value`; only direct
//! subtypes are recognized, so grandchildren resolve through their own
//! parent's factory.
//!
//! ```
//! use graphwire_models::{OfferShiftRequest, SwapShiftsChangeRequest, Parsable};
//!
//! let payload = br##"{"@odata.type":"#microsoft.graph.swapShiftsChangeRequest","recipientShiftId":"s2"}"##;
//! let request = graphwire_json::from_slice(payload, OfferShiftRequest::create_from_discriminator_value)
//!     .unwrap()
//!     .unwrap();
//! let request: &dyn Parsable = &*request;
//! let swap = request.downcast_ref::<SwapShiftsChangeRequest>().unwrap();
//! assert_eq!(swap.recipient_shift_id().unwrap().as_deref(), Some("s2"));
//! ```

#[macro_use]
mod macros;

mod catalog;
mod change_tracked_entity;
mod delegated_admin_relationship;
mod delegated_admin_relationship_customer_participant;
mod device_configuration;
mod entity;
mod enums;
mod identity;
mod identity_set;
mod key_credential;
mod offer_shift_request;
mod open_shift_change_request;
mod reseller_delegated_admin_relationship;
mod schedule;
mod schedule_change_request;
mod scheduling_group;
mod swap_shifts_change_request;
mod teamwork_user_identity;
mod time_off_request;
mod windows_update_active_hours_install;
mod windows_update_for_business_configuration;
mod windows_update_install_schedule_type;
mod windows_update_scheduled_install;

pub use catalog::{catalog, describe, lookup, CatalogError, ModelDef, ModelFactory};
pub use change_tracked_entity::{ChangeTrackedEntity, ChangeTrackedEntityable};
pub use delegated_admin_relationship::{DelegatedAdminRelationship, DelegatedAdminRelationshipable};
pub use delegated_admin_relationship_customer_participant::DelegatedAdminRelationshipCustomerParticipant;
pub use device_configuration::{DeviceConfiguration, DeviceConfigurationable};
pub use entity::{Entity, Entityable};
pub use enums::{
    AutomaticUpdateMode, DelegatedAdminRelationshipStatus, Enablement, OperationStatus, ScheduleChangeRequestActor,
    ScheduleChangeState, TeamworkUserIdentityType, WeeklySchedule, WindowsUpdateForBusinessUpdateWeeks,
};
pub use graphwire_abstractions::Parsable;
pub use identity::{Identity, Identityable};
pub use identity_set::IdentitySet;
pub use key_credential::KeyCredential;
pub use offer_shift_request::{OfferShiftRequest, OfferShiftRequestable};
pub use open_shift_change_request::OpenShiftChangeRequest;
pub use reseller_delegated_admin_relationship::ResellerDelegatedAdminRelationship;
pub use schedule::Schedule;
pub use schedule_change_request::{ScheduleChangeRequest, ScheduleChangeRequestable};
pub use scheduling_group::SchedulingGroup;
pub use swap_shifts_change_request::SwapShiftsChangeRequest;
pub use teamwork_user_identity::TeamworkUserIdentity;
pub use time_off_request::TimeOffRequest;
pub use windows_update_active_hours_install::WindowsUpdateActiveHoursInstall;
pub use windows_update_for_business_configuration::WindowsUpdateForBusinessConfiguration;
pub use windows_update_install_schedule_type::{
    WindowsUpdateInstallScheduleType, WindowsUpdateInstallScheduleTypeable,
};
pub use windows_update_scheduled_install::WindowsUpdateScheduledInstall;
