//! Locker Records and Wire Types
//!
//! This module defines the locker record as reported by the locker service,
//! along with the request and response bodies of every endpoint the client
//! consumes.
//!
//! # Record Layout
//!
//! The service owns the record schema. The client reads a handful of known
//! fields (`lockerId`, `status`, `lightStatus`, `batteryPercentage`,
//! `latitude`, `longitude`) and keeps every other field verbatim, in the order
//! the server sent it, so exports reproduce the record exactly.
//!
//! # Envelopes
//!
//! Every response carries `success: bool`. A `false` value comes with a
//! `message` and is a business failure, distinct from a transport failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier key
pub const LOCKER_ID: &str = "lockerId";
pub const STATUS: &str = "status";
pub const LIGHT_STATUS: &str = "lightStatus";
pub const BATTERY_PERCENTAGE: &str = "batteryPercentage";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Server-managed keys that never appear in the edit form
pub const READ_ONLY_FIELDS: [&str; 3] = ["_id", "createdAt", "updatedAt"];

/// One physical locker unit and its telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Locker {
    locker_id: String,
    fields: Map<String, Value>,
}

impl Locker {
    /// Identifier assigned by the service at registration
    pub fn id(&self) -> &str {
        &self.locker_id
    }

    /// All fields in server order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field rendered as form text: strings verbatim, null or absent as empty.
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn status(&self) -> String {
        self.text(STATUS)
    }

    pub fn light_status(&self) -> String {
        self.text(LIGHT_STATUS)
    }

    pub fn battery_percentage(&self) -> Option<f64> {
        self.number(BATTERY_PERCENTAGE)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.number(LATITUDE)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.number(LONGITUDE)
    }

    /// Coordinates usable on a map.
    ///
    /// Both values must be JSON numbers, and `(0, 0)` is the "no fix" sentinel.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let latitude = self.latitude()?;
        let longitude = self.longitude()?;
        if latitude == 0.0 && longitude == 0.0 {
            return None;
        }
        Some((latitude, longitude))
    }

    pub fn is_mappable(&self) -> bool {
        self.coordinates().is_some()
    }

    fn number(&self, key: &str) -> Option<f64> {
        match self.fields.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }
}

impl TryFrom<Map<String, Value>> for Locker {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let locker_id = match fields.get(LOCKER_ID) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => return Err(format!("lockerId must be a string, got {other}")),
            None => return Err("locker record is missing lockerId".to_string()),
        };
        Ok(Self { locker_id, fields })
    }
}

impl From<Locker> for Map<String, Value> {
    fn from(locker: Locker) -> Self {
        locker.fields
    }
}

/// Lifecycle command accepted by `/locker/command`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockerCommand {
    Lock,
    Unlock,
}

impl LockerCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockerCommand::Lock => "lock",
            LockerCommand::Unlock => "unlock",
        }
    }
}

impl fmt::Display for LockerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common shape of every service response
pub trait ServiceReply {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

/// Generic `{success, message?}` response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /locker/all`
#[derive(Debug, Clone, Deserialize)]
pub struct ListLockersResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lockers: Vec<Locker>,
}

/// Body of `POST /locker/command`
#[derive(Debug, Clone, Serialize)]
pub struct CommandRequest<'a> {
    pub id: &'a str,
    pub command: LockerCommand,
}

/// Response of `POST /locker/command`
#[derive(Debug, Clone, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub locker: Option<CommandSnapshot>,
}

/// Locker snapshot echoed back by the command endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CommandSnapshot {
    #[serde(rename = "isRunCommand", default)]
    pub is_run_command: bool,
}

/// Body of `PUT /locker/update/{lockerId}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLockerRequest {
    pub locker_id: String,
    pub status: Value,
    pub light_status: Value,
    pub battery_percentage: Value,
    pub latitude: Value,
    pub longitude: Value,
}

macro_rules! impl_service_reply {
    ($($ty:ty),*) => {
        $(impl ServiceReply for $ty {
            fn success(&self) -> bool {
                self.success
            }

            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        })*
    };
}

impl_service_reply!(ApiEnvelope, ListLockersResponse, CommandResponse);
