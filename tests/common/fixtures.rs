//! Locker JSON fixtures
//!
//! Records are built the way the locker service returns them, including the
//! read-only bookkeeping fields.

use serde_json::{json, Value};

use lockerdesk::shared::Locker;

/// A full locker record as returned by `GET /locker/all`
pub fn locker_json(locker_id: &str, status: &str, latitude: Value, longitude: Value) -> Value {
    json!({
        "_id": format!("db-{}", locker_id),
        "lockerId": locker_id,
        "status": status,
        "lightStatus": "off",
        "batteryPercentage": 80,
        "latitude": latitude,
        "longitude": longitude,
        "createdAt": "2024-05-01T08:00:00.000Z",
        "updatedAt": "2024-05-02T09:30:00.000Z"
    })
}

/// Locker positioned around Makassar
pub fn placed_locker(locker_id: &str, status: &str) -> Value {
    locker_json(locker_id, status, json!(-5.1477), json!(119.4327))
}

/// Locker that reports the (0, 0) "no fix" position
pub fn unplaced_locker(locker_id: &str) -> Value {
    locker_json(locker_id, "unlocked", json!(0), json!(0))
}

pub fn list_body(lockers: &[Value]) -> String {
    json!({ "success": true, "lockers": lockers }).to_string()
}

pub fn ok_body(message: &str) -> String {
    json!({ "success": true, "message": message }).to_string()
}

pub fn rejected_body(message: &str) -> String {
    json!({ "success": false, "message": message }).to_string()
}

pub fn command_body(message: &str, is_run_command: bool) -> String {
    json!({
        "success": true,
        "message": message,
        "locker": { "isRunCommand": is_run_command }
    })
    .to_string()
}

/// Decode a fixture into a [`Locker`]
pub fn locker(value: Value) -> Locker {
    serde_json::from_value(value).expect("fixture is a valid locker")
}
