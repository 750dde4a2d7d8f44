//! Locker edit form and update payload assembly.
//!
//! The form holds raw text. An empty field, or one still holding its prefilled
//! text, keeps the value from the snapshot the edit started from, with its
//! original JSON type. The snapshot is never re-fetched, so the submitted
//! payload is last-writer-wins against concurrent server changes.

use serde_json::Value;

use crate::shared::error::{Operation, SyncError};
use crate::shared::locker::{
    Locker, UpdateLockerRequest, BATTERY_PERCENTAGE, LATITUDE, LIGHT_STATUS, LONGITUDE, STATUS,
};

/// Sparse field overrides as typed into the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockerOverrides {
    pub status: String,
    pub light_status: String,
    pub battery_percentage: String,
    pub latitude: String,
    pub longitude: String,
}

impl LockerOverrides {
    /// Form prefilled with the snapshot's current values
    pub fn prefilled(snapshot: &Locker) -> Self {
        Self {
            status: snapshot.text(STATUS),
            light_status: snapshot.text(LIGHT_STATUS),
            battery_percentage: snapshot.text(BATTERY_PERCENTAGE),
            latitude: snapshot.text(LATITUDE),
            longitude: snapshot.text(LONGITUDE),
        }
    }

    /// Build the full update payload, filling gaps from `snapshot`.
    ///
    /// Numeric fields are parsed before anything is sent.
    pub fn to_request(&self, snapshot: &Locker) -> Result<UpdateLockerRequest, SyncError> {
        Ok(UpdateLockerRequest {
            locker_id: snapshot.id().to_string(),
            status: text_or(snapshot, STATUS, &self.status),
            light_status: text_or(snapshot, LIGHT_STATUS, &self.light_status),
            battery_percentage: number_or(snapshot, BATTERY_PERCENTAGE, &self.battery_percentage)?,
            latitude: number_or(snapshot, LATITUDE, &self.latitude)?,
            longitude: number_or(snapshot, LONGITUDE, &self.longitude)?,
        })
    }
}

fn snapshot_value(snapshot: &Locker, key: &str) -> Value {
    snapshot.get(key).cloned().unwrap_or(Value::Null)
}

/// Empty input, or the prefilled text left as it was
fn unchanged(snapshot: &Locker, key: &str, input: &str) -> bool {
    input.is_empty() || input == snapshot.text(key)
}

fn text_or(snapshot: &Locker, key: &str, input: &str) -> Value {
    if unchanged(snapshot, key, input) {
        snapshot_value(snapshot, key)
    } else {
        Value::String(input.to_string())
    }
}

fn number_or(snapshot: &Locker, key: &str, input: &str) -> Result<Value, SyncError> {
    if unchanged(snapshot, key, input) {
        return Ok(snapshot_value(snapshot, key));
    }

    let parsed = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            SyncError::validation(
                Operation::UpdateLocker,
                key,
                format!("{} must be a number, got '{}'", key, input),
            )
        })?;

    Ok(Value::from(parsed))
}
