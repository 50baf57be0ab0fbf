// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Populated payloads survive parse and re-serialization, in base-first
//! order.

use bytes::Bytes;
use graphwire_abstractions::{IsoDuration, ParsableFactory, ParseNode, SerializationError, StoreError};
use graphwire_json::JsonParseNode;
use graphwire_models::{
    ChangeTrackedEntity, DelegatedAdminRelationship, DelegatedAdminRelationshipStatus, DeviceConfiguration, Entity,
    Entityable, IdentitySet, KeyCredential, OfferShiftRequest, OpenShiftChangeRequest, OperationStatus, Parsable,
    ResellerDelegatedAdminRelationship, Schedule, ScheduleChangeRequest, SchedulingGroup, SwapShiftsChangeRequest,
    TeamworkUserIdentity, TeamworkUserIdentityType, TimeOffRequest, WindowsUpdateActiveHoursInstall,
    WindowsUpdateForBusinessConfiguration, WindowsUpdateForBusinessUpdateWeeks, WindowsUpdateInstallScheduleType,
    WindowsUpdateScheduledInstall, WeeklySchedule,
};
use serde_json::{json, Value};

fn parse<T: ?Sized + Parsable>(doc: &Value, factory: ParsableFactory<T>) -> Box<T> {
    graphwire_json::from_value(doc, factory).unwrap().expect("object payload")
}

fn keys(value: &Value) -> Vec<&str> {
    value.as_object().expect("object").keys().map(String::as_str).collect()
}

/// Parse `doc` and expect the same members back in the same order.
fn assert_round_trip<T: ?Sized + Parsable>(doc: &Value, factory: ParsableFactory<T>) -> Box<T> {
    let model = parse(doc, factory);
    let written = graphwire_json::to_value(&*model).unwrap();
    assert_eq!(written, *doc);
    assert_eq!(keys(&written), keys(doc));
    model
}

#[test]
fn schedule_round_trips_with_nested_collections() {
    let doc = json!({
        "id": "sched-1",
        "@odata.type": "#microsoft.graph.schedule",
        "enabled": true,
        "offerShiftRequests": [
            { "@odata.type": "#microsoft.graph.offerShiftRequest", "id": "o1", "recipientUserId": "u2" },
            { "@odata.type": "#microsoft.graph.swapShiftsChangeRequest", "id": "o2", "recipientShiftId": "s9" }
        ],
        "openShiftsEnabled": false,
        "provisionStatus": "Completed",
        "schedulingGroups": [
            { "@odata.type": "#microsoft.graph.schedulingGroup", "id": "g1", "displayName": "Cashiers", "isActive": true, "userIds": ["u1", "u2"] }
        ],
        "timeZone": "America/Chicago",
        "workforceIntegrationIds": []
    });
    let schedule = parse(&doc, Schedule::create_from_discriminator_value);

    assert_eq!(schedule.enabled().unwrap(), Some(true));
    assert_eq!(schedule.provision_status().unwrap(), Some(OperationStatus::Completed));
    let offers = schedule.offer_shift_requests().unwrap().expect("offers");
    assert_eq!(offers.len(), 2);
    assert!((&*offers[1] as &dyn Parsable).is::<SwapShiftsChangeRequest>());
    let groups = schedule.scheduling_groups().unwrap().expect("groups");
    assert_eq!(groups[0].user_ids().unwrap(), Some(vec!["u1".to_owned(), "u2".to_owned()]));
    assert_eq!(schedule.workforce_integration_ids().unwrap(), Some(Vec::new()));
    assert!(schedule.time_off_requests().unwrap().is_none());

    let written = graphwire_json::to_value(&*schedule).unwrap();
    assert_eq!(written, doc);
}

#[test]
fn derived_fields_follow_base_fields() {
    let mut swap = SwapShiftsChangeRequest::new();
    swap.set_recipient_shift_id(Some("s2".into())).unwrap();
    swap.set_sender_shift_id(Some("s1".into())).unwrap();
    swap.set_sender_user_id(Some("u1".into())).unwrap();
    swap.set_created_date_time(Some("2024-03-01T09:00:00Z".parse().unwrap())).unwrap();
    swap.set_id(Some("r1".into())).unwrap();

    let written = graphwire_json::to_value(&swap).unwrap();
    assert_eq!(
        keys(&written),
        vec!["id", "@odata.type", "createdDateTime", "senderUserId", "senderShiftId", "recipientShiftId"]
    );
}

#[test]
fn absent_and_empty_collections_stay_distinct() {
    let mut group = SchedulingGroup::new();
    assert_eq!(group.user_ids().unwrap(), None);
    group.set_user_ids(Some(Vec::new())).unwrap();
    assert_eq!(group.user_ids().unwrap(), Some(Vec::new()));
    assert_eq!(graphwire_json::to_value(&group).unwrap()["userIds"], json!([]));

    group.set_user_ids(None).unwrap();
    assert_eq!(group.user_ids().unwrap(), None);
    assert!(graphwire_json::to_value(&group).unwrap().get("userIds").is_none());
}

#[test]
fn field_errors_name_the_field_and_abort_the_object() {
    let doc = json!({ "id": "s", "timeClockEnabled": "yes" });
    let err = graphwire_json::from_value(&doc, Schedule::create_from_discriminator_value)
        .err()
        .expect("bool field holding a string");
    assert_eq!(err.field_path(), vec!["timeClockEnabled"]);
    assert!(matches!(err.root_cause(), SerializationError::UnexpectedNodeType { .. }));

    let nested = json!({ "schedulingGroups": [ { "isActive": 3 } ] });
    let err = graphwire_json::from_value(&nested, Schedule::create_from_discriminator_value)
        .err()
        .expect("nested failure");
    assert_eq!(err.field_path(), vec!["schedulingGroups", "isActive"]);
}

#[test]
fn getters_report_type_mismatches() {
    let mut schedule = Schedule::new();
    schedule.store_mut().set_value("timeZone", Some(true)).unwrap();
    assert!(matches!(schedule.time_zone(), Err(StoreError::TypeMismatch { .. })));
}

#[test]
fn enums_and_flags_use_their_wire_strings() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.windowsUpdateForBusinessConfiguration",
        "automaticUpdateMode": "autoInstallAtMaintenanceTime",
        "featureUpdatesPauseStartDate": "2024-05-01",
        "installationSchedule": {
            "@odata.type": "#microsoft.graph.windowsUpdateScheduledInstall",
            "scheduledInstallDay": "friday",
            "scheduledInstallTime": "03:30:00"
        },
        "updateWeeks": "firstWeek,thirdWeek",
        "userPauseAccess": "someFutureSetting"
    });
    let config = parse(&doc, WindowsUpdateForBusinessConfiguration::create_from_discriminator_value);
    assert_eq!(
        config.update_weeks().unwrap(),
        Some(WindowsUpdateForBusinessUpdateWeeks::FIRST_WEEK | WindowsUpdateForBusinessUpdateWeeks::THIRD_WEEK)
    );
    assert_eq!(config.user_pause_access().unwrap(), None);

    let schedule = config.installation_schedule().unwrap().expect("schedule");
    let schedule: &dyn Parsable = schedule;
    let scheduled = schedule.downcast_ref::<WindowsUpdateScheduledInstall>().expect("scheduled install");
    assert_eq!(scheduled.scheduled_install_day().unwrap(), Some(WeeklySchedule::Friday));

    let written = graphwire_json::to_value(&*config).unwrap();
    assert_eq!(written["updateWeeks"], json!("firstWeek,thirdWeek"));
    assert_eq!(written["featureUpdatesPauseStartDate"], json!("2024-05-01"));
    assert_eq!(written["installationSchedule"]["scheduledInstallTime"], json!("03:30:00"));
    assert!(written.get("userPauseAccess").is_none());
}

#[test]
fn identity_sets_hold_polymorphic_identities() {
    let doc = json!({
        "user": {
            "@odata.type": "#microsoft.graph.teamworkUserIdentity",
            "id": "u1",
            "displayName": "Ada",
            "userIdentityType": "emailUser"
        }
    });
    let set = parse(&doc, IdentitySet::create_from_discriminator_value);
    let user: &dyn Parsable = set.user().unwrap().expect("user");
    let user = user.downcast_ref::<TeamworkUserIdentity>().expect("teams user");
    assert_eq!(user.user_identity_type().unwrap(), Some(TeamworkUserIdentityType::EmailUser));
    assert_eq!(user.display_name().unwrap().as_deref(), Some("Ada"));
    assert!(set.application().unwrap().is_none());

    let written = graphwire_json::to_value(&*set).unwrap();
    assert_eq!(keys(&written), vec!["@odata.type", "user"]);
    assert_eq!(
        keys(&written["user"]),
        vec!["displayName", "id", "@odata.type", "userIdentityType"]
    );
}

#[test]
fn key_credentials_carry_bytes_and_uuids() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.keyCredential",
        "customKeyIdentifier": "AQID",
        "key": "aGVsbG8=",
        "keyId": "6a0b3e2c-8f1d-4c52-9a3b-2f5e7d9c1a40",
        "type": "AsymmetricX509Cert",
        "usage": "Verify"
    });
    let credential = parse(&doc, KeyCredential::create_from_discriminator_value);
    assert_eq!(credential.custom_key_identifier().unwrap(), Some(Bytes::from_static(&[1, 2, 3])));
    assert_eq!(credential.key().unwrap(), Some(Bytes::from_static(b"hello")));
    assert_eq!(credential.r#type().unwrap().as_deref(), Some("AsymmetricX509Cert"));
    assert_eq!(graphwire_json::to_value(&*credential).unwrap(), doc);
}

#[test]
fn relationships_keep_durations_and_customer() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.delegatedAdminRelationship",
        "autoExtendDuration": "P180D",
        "customer": {
            "@odata.type": "#microsoft.graph.delegatedAdminRelationshipCustomerParticipant",
            "displayName": "Contoso",
            "tenantId": "t-1"
        },
        "duration": "P730D",
        "status": "approvalPending"
    });
    let relationship = parse(&doc, DelegatedAdminRelationship::create_from_discriminator_value);
    let relationship: &dyn Parsable = &*relationship;
    let relationship = relationship.downcast_ref::<DelegatedAdminRelationship>().unwrap();
    assert_eq!(relationship.duration().unwrap(), Some(IsoDuration::from_days(730)));
    assert_eq!(
        relationship.status().unwrap(),
        Some(DelegatedAdminRelationshipStatus::ApprovalPending)
    );
    let customer = relationship.customer().unwrap().expect("customer");
    assert_eq!(customer.tenant_id().unwrap().as_deref(), Some("t-1"));
    assert_eq!(graphwire_json::to_value(relationship).unwrap(), doc);
}

#[test]
fn additional_data_survives_after_the_entity_fields() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.offerShiftRequest",
        "id": "o1",
        "recipientUserId": "u2",
        "extension": { "nested": [1, 2] }
    });
    let offer = parse(&doc, OfferShiftRequest::create_from_discriminator_value);
    let written = graphwire_json::to_value(&*offer).unwrap();
    assert_eq!(keys(&written), vec!["id", "@odata.type", "extension", "recipientUserId"]);
    assert_eq!(written["extension"], json!({ "nested": [1, 2] }));
}

#[test]
fn parsed_values_are_not_reported_as_changes() {
    let doc = json!({ "id": "e1", "@odata.type": "#microsoft.graph.entity" });
    let mut entity = parse(&doc, Entity::create_from_discriminator_value);
    let store = entity.backing_store_mut();
    assert!(store.initialization_completed());
    store.set_return_only_changed_values(true);
    assert!(store.enumerate().is_empty());

    entity.entity_mut().set_id(Some("e2".into())).unwrap();
    let changed: Vec<_> = entity.backing_store().enumerate().into_iter().map(|(key, _)| key).collect();
    assert_eq!(changed, vec!["id"]);
}

#[test]
fn every_catalogued_model_round_trips_when_empty() {
    for def in graphwire_models::catalog() {
        let doc = json!({ "@odata.type": def.tag });
        let model = def.parse(&graphwire_json::JsonParseNode::new(&doc)).unwrap();
        assert_eq!(graphwire_json::to_value(&*model).unwrap(), doc, "{}", def.name);
    }
}

#[test]
fn time_off_requests_round_trip_after_request_fields() {
    let doc = json!({
        "id": "t1",
        "@odata.type": "#microsoft.graph.timeOffRequest",
        "createdDateTime": "2024-06-01T08:00:00Z",
        "assignedTo": "manager",
        "senderUserId": "u1",
        "state": "pending",
        "endDateTime": "2024-06-03T17:00:00Z",
        "startDateTime": "2024-06-03T09:00:00Z",
        "timeOffReasonId": "vacation"
    });
    let request = assert_round_trip(&doc, ScheduleChangeRequest::create_from_discriminator_value);
    let request: &dyn Parsable = &*request;
    let request = request.downcast_ref::<TimeOffRequest>().expect("time off request");
    assert_eq!(request.time_off_reason_id().unwrap().as_deref(), Some("vacation"));
}

#[test]
fn open_shift_requests_round_trip_after_request_fields() {
    let doc = json!({
        "id": "os1",
        "@odata.type": "#microsoft.graph.openShiftChangeRequest",
        "lastModifiedDateTime": "2024-06-02T10:15:00Z",
        "senderMessage": "I can cover",
        "senderUserId": "u3",
        "openShiftId": "open-7"
    });
    let request = assert_round_trip(&doc, ScheduleChangeRequest::create_from_discriminator_value);
    let request: &dyn Parsable = &*request;
    let request = request.downcast_ref::<OpenShiftChangeRequest>().expect("open shift request");
    assert_eq!(request.open_shift_id().unwrap().as_deref(), Some("open-7"));
}

#[test]
fn reseller_relationships_round_trip_after_relationship_fields() {
    let doc = json!({
        "id": "rel-2",
        "@odata.type": "#microsoft.graph.resellerDelegatedAdminRelationship",
        "displayName": "Contoso via Fabrikam",
        "duration": "P730D",
        "status": "active",
        "indirectProviderTenantId": "t-ind",
        "isPartnerConsentPending": true
    });
    let relationship = assert_round_trip(&doc, DelegatedAdminRelationship::create_from_discriminator_value);
    let relationship: &dyn Parsable = &*relationship;
    let relationship = relationship
        .downcast_ref::<ResellerDelegatedAdminRelationship>()
        .expect("reseller relationship");
    assert_eq!(relationship.is_partner_consent_pending().unwrap(), Some(true));
}

#[test]
fn active_hours_installs_round_trip_after_root_data() {
    let doc = json!({
        "@odata.type": "#microsoft.graph.windowsUpdateActiveHoursInstall",
        "note": "lab machines",
        "activeHoursEnd": "17:00:00",
        "activeHoursStart": "08:30:00"
    });
    let install = assert_round_trip(&doc, WindowsUpdateInstallScheduleType::create_from_discriminator_value);
    let install: &dyn Parsable = &*install;
    let install = install
        .downcast_ref::<WindowsUpdateActiveHoursInstall>()
        .expect("active hours install");
    assert_eq!(install.active_hours_start().unwrap(), chrono::NaiveTime::from_hms_opt(8, 30, 0));
}

#[test]
fn device_configurations_round_trip_with_graph_precision() {
    let doc = json!({
        "id": "dc1",
        "@odata.type": "#microsoft.graph.deviceConfiguration",
        "createdDateTime": "2024-06-01T08:00:00Z",
        "description": "Baseline",
        "displayName": "Windows baseline",
        "lastModifiedDateTime": "2024-06-01T08:00:00.1234567Z",
        "version": 3
    });
    let config = assert_round_trip(&doc, DeviceConfiguration::create_from_discriminator_value);
    let config: &dyn Parsable = &*config;
    let config = config.downcast_ref::<DeviceConfiguration>().expect("device configuration");
    assert_eq!(config.version().unwrap(), Some(3));
}

#[test]
fn change_tracked_entities_round_trip_with_identity_sets() {
    let doc = json!({
        "id": "c1",
        "@odata.type": "#microsoft.graph.changeTrackedEntity",
        "createdBy": {
            "@odata.type": "#microsoft.graph.identitySet",
            "user": { "displayName": "Ada", "id": "u1", "@odata.type": "#microsoft.graph.identity" }
        },
        "createdDateTime": "2024-06-01T08:00:00Z",
        "lastModifiedBy": {
            "application": { "displayName": "Scheduler", "id": "app-1", "@odata.type": "#microsoft.graph.identity" },
            "@odata.type": "#microsoft.graph.identitySet"
        },
        "lastModifiedDateTime": "2024-06-02T08:00:00Z"
    });
    let entity = assert_round_trip(&doc, ChangeTrackedEntity::create_from_discriminator_value);
    let entity: &dyn Parsable = &*entity;
    assert!(entity.is::<ChangeTrackedEntity>());
    let written = graphwire_json::to_value(entity).unwrap();
    assert_eq!(keys(&written["createdBy"]), vec!["@odata.type", "user"]);
    assert_eq!(keys(&written["lastModifiedBy"]), vec!["application", "@odata.type"]);
}

#[test]
fn empty_flag_sets_stay_present() {
    let mut config = WindowsUpdateForBusinessConfiguration::new();
    config.set_update_weeks(Some(WindowsUpdateForBusinessUpdateWeeks::empty())).unwrap();
    let written = graphwire_json::to_value(&config).unwrap();
    assert_eq!(written["updateWeeks"], json!(""));

    let parsed = parse(&written, WindowsUpdateForBusinessConfiguration::create_from_discriminator_value);
    assert_eq!(parsed.update_weeks().unwrap(), Some(WindowsUpdateForBusinessUpdateWeeks::empty()));
}

#[test]
fn failed_assignment_leaves_change_tracking_on() {
    let mut entity = Entity::new();
    let doc = json!({ "id": 5 });
    let node = JsonParseNode::new(&doc);
    let node: &dyn ParseNode = &node;
    let err = node.assign_field_values(&mut entity).err().expect("number in a string field");
    assert_eq!(err.field_path(), vec!["id"]);
    assert!(entity.store().initialization_completed());

    entity.set_id(Some("e9".into())).unwrap();
    entity.store_mut().set_return_only_changed_values(true);
    assert_eq!(entity.id().unwrap().as_deref(), Some("e9"));
}
