// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Enum types referenced by the models.
//!
//! Integer values follow declaration order and index each enum's string
//! table, so new members are only ever appended.

use graphwire_abstractions::{flag_enum, wire_enum};

wire_enum! {
    /// Party that acted last on a schedule change request.
    pub enum ScheduleChangeRequestActor: "scheduleChangeRequestActor" {
        /// The requesting user.
        Sender = "sender",
        /// The user asked to take over or swap the shift.
        Recipient = "recipient",
        /// A team manager.
        Manager = "manager",
        /// An automated process.
        System = "system",
        /// Evolvable enumeration sentinel.
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    /// Approval state of a schedule change request.
    pub enum ScheduleChangeState: "scheduleChangeState" {
        /// Awaiting action.
        Pending = "pending",
        /// Approved.
        Approved = "approved",
        /// Declined.
        Declined = "declined",
        /// Evolvable enumeration sentinel.
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    /// Progress of a long-running provisioning operation.
    pub enum OperationStatus: "operationStatus" {
        /// Not started.
        NotStarted = "NotStarted",
        /// Running.
        Running = "Running",
        /// Completed.
        Completed = "Completed",
        /// Failed.
        Failed = "Failed",
    }
}

wire_enum! {
    /// Kind of account behind a Teams user identity.
    pub enum TeamworkUserIdentityType: "teamworkUserIdentityType" {
        /// Microsoft Entra user.
        AadUser = "aadUser",
        /// User synchronized from on-premises directory.
        OnPremiseAadUser = "onPremiseAadUser",
        /// Anonymous meeting guest.
        AnonymousGuest = "anonymousGuest",
        /// User from a federated organization.
        FederatedUser = "federatedUser",
        /// Personal Microsoft account.
        PersonalMicrosoftAccountUser = "personalMicrosoftAccountUser",
        /// Skype user.
        SkypeUser = "skypeUser",
        /// PSTN caller.
        PhoneUser = "phoneUser",
        /// Evolvable enumeration sentinel.
        UnknownFutureValue = "unknownFutureValue",
        /// Email-only user.
        EmailUser = "emailUser",
        /// Azure Communication Services user.
        AzureCommunicationServicesUser = "azureCommunicationServicesUser",
    }
}

wire_enum! {
    /// How Windows Update installs updates on a device.
    pub enum AutomaticUpdateMode: "automaticUpdateMode" {
        /// Defined by the user.
        UserDefined = "userDefined",
        /// Notify before download.
        NotifyDownload = "notifyDownload",
        /// Install at maintenance time.
        AutoInstallAtMaintenanceTime = "autoInstallAtMaintenanceTime",
        /// Install and reboot at maintenance time.
        AutoInstallAndRebootAtMaintenanceTime = "autoInstallAndRebootAtMaintenanceTime",
        /// Install and reboot at the scheduled time.
        AutoInstallAndRebootAtScheduledTime = "autoInstallAndRebootAtScheduledTime",
        /// Install and reboot without end-user control.
        AutoInstallAndRebootWithoutEndUserControl = "autoInstallAndRebootWithoutEndUserControl",
    }
}

wire_enum! {
    /// Tri-state setting.
    pub enum Enablement: "enablement" {
        /// Left to the device default.
        NotConfigured = "notConfigured",
        /// Enabled.
        Enabled = "enabled",
        /// Disabled.
        Disabled = "disabled",
    }
}

wire_enum! {
    /// Day (or days) a scheduled action runs.
    pub enum WeeklySchedule: "weeklySchedule" {
        /// Defined by the user.
        UserDefined = "userDefined",
        /// Every day.
        Everyday = "everyday",
        /// Sunday.
        Sunday = "sunday",
        /// Monday.
        Monday = "monday",
        /// Tuesday.
        Tuesday = "tuesday",
        /// Wednesday.
        Wednesday = "wednesday",
        /// Thursday.
        Thursday = "thursday",
        /// Friday.
        Friday = "friday",
        /// Saturday.
        Saturday = "saturday",
        /// Never.
        NoScheduledScan = "noScheduledScan",
    }
}

wire_enum! {
    /// Lifecycle state of a delegated admin relationship.
    pub enum DelegatedAdminRelationshipStatus: "delegatedAdminRelationshipStatus" {
        /// Being activated.
        Activating = "activating",
        /// Active.
        Active = "active",
        /// Waiting for customer approval.
        ApprovalPending = "approvalPending",
        /// Approved by the customer.
        Approved = "approved",
        /// Created, not yet sent.
        Created = "created",
        /// Expired.
        Expired = "expired",
        /// About to expire.
        Expiring = "expiring",
        /// Terminated.
        Terminated = "terminated",
        /// Being terminated.
        Terminating = "terminating",
        /// Termination was requested.
        TerminationRequested = "terminationRequested",
        /// Evolvable enumeration sentinel.
        UnknownFutureValue = "unknownFutureValue",
    }
}

flag_enum! {
    /// Weeks of the month in which updates install.
    pub struct WindowsUpdateForBusinessUpdateWeeks: "windowsUpdateForBusinessUpdateWeeks" {
        /// Defined by the user.
        const USER_DEFINED = 1 => "userDefined";
        /// First week.
        const FIRST_WEEK = 2 => "firstWeek";
        /// Second week.
        const SECOND_WEEK = 4 => "secondWeek";
        /// Third week.
        const THIRD_WEEK = 8 => "thirdWeek";
        /// Fourth week.
        const FOURTH_WEEK = 16 => "fourthWeek";
        /// Every week.
        const EVERY_WEEK = 32 => "everyWeek";
        /// Evolvable enumeration sentinel.
        const UNKNOWN_FUTURE_VALUE = 64 => "unknownFutureValue";
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use graphwire_abstractions::WireEnum;
    use proptest::prelude::*;

    fn assert_inverse<T: WireEnum + std::fmt::Display>(all: &[T]) {
        for value in all {
            assert_eq!(T::parse_wire(&value.to_string()), Some(*value), "{value}");
        }
        assert_eq!(T::parse_wire("not-a-real-value"), None);
    }

    #[test]
    fn every_enum_parses_its_own_strings() {
        assert_inverse(ScheduleChangeRequestActor::ALL);
        assert_inverse(ScheduleChangeState::ALL);
        assert_inverse(OperationStatus::ALL);
        assert_inverse(TeamworkUserIdentityType::ALL);
        assert_inverse(AutomaticUpdateMode::ALL);
        assert_inverse(Enablement::ALL);
        assert_inverse(WeeklySchedule::ALL);
        assert_inverse(DelegatedAdminRelationshipStatus::ALL);
    }

    #[test]
    fn members_after_the_sentinel_keep_their_values() {
        assert_eq!(TeamworkUserIdentityType::UnknownFutureValue as u64, 7);
        assert_eq!(TeamworkUserIdentityType::EmailUser.to_bits(), 8);
        assert_eq!(
            TeamworkUserIdentityType::parse("azureCommunicationServicesUser"),
            Some(TeamworkUserIdentityType::AzureCommunicationServicesUser)
        );
    }

    #[test]
    fn update_weeks_compose() {
        type Weeks = WindowsUpdateForBusinessUpdateWeeks;
        let parsed = Weeks::parse("firstWeek,thirdWeek").expect("known weeks");
        assert_eq!(parsed, Weeks::FIRST_WEEK | Weeks::THIRD_WEEK);
        assert_eq!(parsed.to_string(), "firstWeek,thirdWeek");
        assert_eq!(Weeks::parse("firstWeek,fifthWeek"), None);
    }

    proptest! {
        #[test]
        fn any_week_set_round_trips(bits in 1_u64..128) {
            let weeks = WindowsUpdateForBusinessUpdateWeeks::from_bits(bits).expect("declared bits");
            let wire = weeks.to_wire_string();
            prop_assert_eq!(WindowsUpdateForBusinessUpdateWeeks::parse(&wire), Some(weeks));
        }

        #[test]
        fn status_values_round_trip_through_bits(index in 0_usize..DelegatedAdminRelationshipStatus::ALL.len()) {
            let status = DelegatedAdminRelationshipStatus::ALL[index];
            prop_assert_eq!(DelegatedAdminRelationshipStatus::from_bits(status.to_bits()), Some(status));
            prop_assert_eq!(status.as_str(), DelegatedAdminRelationshipStatus::NAMES[index]);
        }
    }
}
