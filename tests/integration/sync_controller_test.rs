//! Sync controller integration tests
//!
//! Every request goes through the real HTTP client against a mockito server.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

use lockerdesk::egui_app::edit::LockerOverrides;
use lockerdesk::egui_app::map::MapPlan;
use lockerdesk::egui_app::MemoryClipboard;
use lockerdesk::shared::{ErrorKind, LockerCommand};

use crate::common::*;
use crate::{assert_contains, assert_ok, assert_sync_err};

fn ids(controller: &lockerdesk::egui_app::SyncController) -> Vec<String> {
    controller.store().iter().map(|l| l.id().to_string()).collect()
}

#[test]
fn test_refresh_replaces_store_and_clears_selection() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let first = service.mock_list(&[placed_locker("A", "locked"), placed_locker("B", "unlocked")], 1);
    assert_eq!(assert_ok!(controller.refresh()), 2);
    assert_eq!(ids(&controller), vec!["A", "B"]);
    assert!(controller.select("B"));
    first.assert();
    first.remove();

    let second = service.mock_list(&[placed_locker("C", "locked")], 1);
    assert_eq!(assert_ok!(controller.refresh()), 1);
    second.assert();

    assert_eq!(ids(&controller), vec!["C"]);
    assert_eq!(controller.selected_locker_id(), None);
}

#[test]
fn test_refresh_keeps_service_order_and_duplicates() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();
    let _list = service.mock_list(
        &[
            placed_locker("Z", "locked"),
            placed_locker("A", "unlocked"),
            placed_locker("Z", "unlocked"),
        ],
        1,
    );

    assert_ok!(controller.refresh());
    assert_eq!(ids(&controller), vec!["Z", "A", "Z"]);
    assert_eq!(controller.store().get("Z").map(|l| l.status()), Some("locked".to_string()));
}

#[test]
fn test_failed_refresh_leaves_store_and_selection() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let ok = service.mock_list(&[placed_locker("A", "locked")], 1);
    assert_ok!(controller.refresh());
    assert!(controller.select("A"));
    ok.remove();

    let before = controller.store().clone();
    let down = service.mock_list_status(503, r#"{"success":false,"message":"maintenance"}"#);
    let err = controller.refresh().unwrap_err();
    down.assert();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_contains!(err.to_string(), "Failed to fetch lockers");
    assert_contains!(err.to_string(), "maintenance");
    assert_eq!(controller.store(), &before);
    assert_eq!(controller.selected_locker_id(), Some("A"));
}

#[test]
fn test_refresh_rejected_by_service_is_business_error() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();
    let _list = service.mock_list_status(200, &rejected_body("database unavailable"));

    let result = controller.refresh();
    assert_sync_err!(&result, ErrorKind::Business);
    assert_contains!(result.unwrap_err().to_string(), "database unavailable");
    assert!(controller.store().is_empty());
}

#[test]
fn test_create_quota_exceeded_does_not_refresh() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let list = service.mock_list(&[placed_locker("A", "locked")], 1);
    assert_ok!(controller.refresh());
    let before = controller.store().clone();

    let register = service.mock_register(&rejected_body("quota exceeded"));
    let result = controller.create();

    register.assert();
    // Only the initial refresh reached the list endpoint
    list.assert();
    assert_sync_err!(&result, ErrorKind::Business);
    assert_contains!(result.unwrap_err().to_string(), "quota exceeded");
    assert_eq!(controller.store(), &before);
}

#[test]
fn test_create_then_refresh() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let register = service.mock_register(&ok_body("Locker registered"));
    let list = service.mock_list(&[placed_locker("NEW-1", "unlocked")], 1);

    let synced = assert_ok!(controller.create());
    register.assert();
    list.assert();
    assert_eq!(synced.refresh, Ok(1));
    assert_eq!(ids(&controller), vec!["NEW-1"]);
}

#[test]
fn test_mutation_success_survives_failed_refresh() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let _register = service.mock_register(&ok_body("Locker registered"));
    let _list = service.mock_list_status(500, "internal error");

    let synced = assert_ok!(controller.create());
    let refresh_error = synced.refresh.unwrap_err();
    assert_eq!(refresh_error.kind(), ErrorKind::Transport);
    assert_contains!(refresh_error.to_string(), "internal error");
    assert!(controller.store().is_empty());
}

#[test]
fn test_delete_empty_field_sends_nothing() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();
    let delete = service.mock_any_delete();

    let mut field = "   ".to_string();
    let result = controller.delete(&mut field);

    delete.assert();
    assert_sync_err!(&result, ErrorKind::Validation);
    assert_contains!(result.unwrap_err().to_string(), "Please paste a locker ID");
    assert_eq!(field, "   ");
}

#[test]
fn test_delete_trims_id_clears_field_and_refreshes() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let delete = service.mock_delete("A", &ok_body("Locker deleted"));
    let list = service.mock_list(&[placed_locker("B", "locked")], 1);

    let mut field = "  A \n".to_string();
    let synced = assert_ok!(controller.delete(&mut field));

    delete.assert();
    list.assert();
    assert_eq!(synced.refresh, Ok(1));
    assert!(field.is_empty());
    assert_eq!(ids(&controller), vec!["B"]);
}

#[test]
fn test_delete_sends_reserved_characters_encoded() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let wrong = service
        .server
        .mock("DELETE", "/locker/delete/A")
        .with_status(200)
        .with_body(ok_body("Locker deleted"))
        .expect(0)
        .create();
    let named = service.mock_delete("A%23B", &ok_body("Locker deleted"));
    let _list = service.mock_list(&[placed_locker("A", "locked")], 1);

    let mut field = "A#B".to_string();
    assert_ok!(controller.delete(&mut field));

    wrong.assert();
    named.assert();
    assert_eq!(ids(&controller), vec!["A"]);
}

#[test]
fn test_delete_rejected_keeps_field() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let delete = service.mock_delete("GHOST", &rejected_body("Locker not found"));
    let list = service.mock_list(&[], 0);

    let mut field = "GHOST".to_string();
    let result = controller.delete(&mut field);

    delete.assert();
    list.assert();
    assert_sync_err!(&result, ErrorKind::Business);
    assert_eq!(field, "GHOST");
}

#[test]
fn test_update_without_overrides_echoes_snapshot() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let list = service.mock_list(&[placed_locker("A", "locked")], 1);
    assert_ok!(controller.refresh());
    let snapshot = controller.store().get("A").cloned().expect("A loaded");

    let update = service.mock_update(
        "A",
        json!({
            "lockerId": "A",
            "status": "locked",
            "lightStatus": "off",
            "batteryPercentage": 80,
            "latitude": -5.1477,
            "longitude": 119.4327
        }),
        &ok_body("Locker updated"),
    );

    assert_ok!(controller.update(&snapshot, &LockerOverrides::default()));
    update.assert();
    // Update leaves the follow-up refresh to its caller
    list.assert();
}

#[test]
fn test_update_sends_overrides_with_numbers() {
    let mut service = MockLockerService::start();
    let controller = service.controller();
    let snapshot = locker(placed_locker("A", "locked"));

    let update = service.mock_update(
        "A",
        json!({
            "lockerId": "A",
            "status": "maintenance",
            "lightStatus": "off",
            "batteryPercentage": 42.0,
            "latitude": -5.1477,
            "longitude": 119.5
        }),
        &ok_body("Locker updated"),
    );

    let overrides = LockerOverrides {
        status: "maintenance".to_string(),
        battery_percentage: " 42 ".to_string(),
        longitude: "119.5".to_string(),
        ..LockerOverrides::default()
    };
    assert_ok!(controller.update(&snapshot, &overrides));
    update.assert();
}

#[test]
fn test_update_rejects_bad_number_before_sending() {
    let mut service = MockLockerService::start();
    let controller = service.controller();
    let snapshot = locker(placed_locker("A", "locked"));
    let update = service.mock_any_update();

    let overrides = LockerOverrides {
        latitude: "north".to_string(),
        ..LockerOverrides::default()
    };
    let result = controller.update(&snapshot, &overrides);

    update.assert();
    assert_sync_err!(&result, ErrorKind::Validation);
}

#[test]
fn test_lock_command_reports_execution_and_refreshes() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let first = service.mock_list(&[placed_locker("A", "unlocked"), placed_locker("B", "unlocked")], 1);
    assert_ok!(controller.refresh());
    first.remove();

    let command = service.mock_command(
        json!({ "id": "A", "command": "lock" }),
        &command_body("Command queued", true),
    );
    let after = service.mock_list(&[placed_locker("A", "locked"), placed_locker("B", "unlocked")], 1);

    let synced = assert_ok!(controller.send_command("A", LockerCommand::Lock));
    command.assert();
    after.assert();

    assert!(synced.outcome.will_execute);
    assert_contains!(synced.outcome.summary(), "Command queued");
    assert_contains!(synced.outcome.summary(), "The command will be executed.");
    assert_eq!(synced.refresh, Ok(2));
    assert_eq!(controller.store().get("A").map(|l| l.status()), Some("locked".to_string()));
}

#[test]
fn test_unlock_command_not_run() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();

    let command = service.mock_command(
        json!({ "id": "B", "command": "unlock" }),
        &command_body("Locker is offline", false),
    );
    let _list = service.mock_list(&[], 1);

    let synced = assert_ok!(controller.send_command("B", LockerCommand::Unlock));
    command.assert();
    assert!(!synced.outcome.will_execute);
    assert_eq!(synced.outcome.execution_status(), "The command will not be executed.");
}

#[test]
fn test_copy_selected_then_paste() {
    let service = MockLockerService::start();
    let mut controller = service.controller_with(MemoryClipboard::with_text("stale"));

    // Nothing selected yet
    assert_eq!(controller.copy_selected(), None);
    assert_eq!(controller.paste(), Some("stale".to_string()));
    // Unknown ids cannot be selected
    assert!(!controller.select("A"));
}

#[test]
fn test_select_copy_paste_roundtrip_through_clipboard() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();
    let _list = service.mock_list(&[placed_locker("L-9", "locked")], 1);
    assert_ok!(controller.refresh());

    assert_eq!(controller.paste(), None);
    assert!(controller.select("L-9"));
    assert_eq!(controller.copy_selected(), Some("L-9".to_string()));
    assert_eq!(controller.paste(), Some("L-9".to_string()));
}

#[test]
fn test_map_and_export_read_the_store() {
    let mut service = MockLockerService::start();
    let mut controller = service.controller();
    let _list = service.mock_list(&[placed_locker("A", "locked"), unplaced_locker("B")], 1);
    assert_ok!(controller.refresh());

    assert_eq!(
        controller.map_for("B"),
        MapPlan::NoMappableData
    );
    assert_eq!(
        controller.map_for("missing"),
        MapPlan::NoMappableData
    );
    assert_matches!(controller.map_for("A"), MapPlan::Ready(view) => {
        assert_eq!(view.center, (-5.1477, 119.4327));
        assert_eq!(view.markers.len(), 1);
    });

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lockers.csv");
    let outcome = assert_ok!(controller.export_csv(&path));
    assert_eq!(
        outcome,
        lockerdesk::egui_app::export::ExportOutcome::Written {
            path: path.clone(),
            rows: 2
        }
    );
    let csv = std::fs::read_to_string(&path).expect("csv written");
    assert!(csv.starts_with("_id,lockerId,status,lightStatus,batteryPercentage,latitude,longitude,createdAt,updatedAt\r\n"));
}
