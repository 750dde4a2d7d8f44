//! Locker Service API Client
//!
//! Blocking wrappers around the locker REST endpoints. Each call is driven to
//! completion on a runtime owned by the client, so callers on the UI thread
//! see one request at a time, in the order they were issued.
//!
//! Every response is normalized into `Result<_, SyncError>`:
//! a non-2xx status or an undecodable body becomes a transport error, and a
//! `success: false` envelope becomes a business error.

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::egui_app::config::Config;
use crate::shared::error::{Operation, SyncError};
use crate::shared::locker::{
    ApiEnvelope, CommandRequest, CommandResponse, ListLockersResponse, Locker, LockerCommand,
    ServiceReply, UpdateLockerRequest,
};

/// Fallback text when the service rejects a request without a message
const REJECTED_WITHOUT_MESSAGE: &str = "request was rejected by the locker service";

/// Locker service client
pub struct LockerApiClient {
    config: Config,
    client: Client,
    runtime: Runtime,
}

impl LockerApiClient {
    pub fn new(config: Config) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            config,
            client: Client::new(),
            runtime,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET /locker/all`
    pub fn list_lockers(&self) -> Result<Vec<Locker>, SyncError> {
        let url = self.config.api_url("/locker/all");
        let reply: ListLockersResponse =
            self.execute(Operation::FetchLockers, self.client.get(&url))?;
        Ok(reply.lockers)
    }

    /// `POST /locker/register`
    pub fn register_locker(&self) -> Result<ApiEnvelope, SyncError> {
        let url = self.config.api_url("/locker/register");
        self.execute(Operation::AddLocker, self.client.post(&url))
    }

    /// `DELETE /locker/delete/{lockerId}`
    pub fn delete_locker(&self, locker_id: &str) -> Result<ApiEnvelope, SyncError> {
        let url = self.locker_url(&Operation::DeleteLocker, "/locker/delete", locker_id)?;
        self.execute(Operation::DeleteLocker, self.client.delete(url))
    }

    /// `PUT /locker/update/{lockerId}`
    pub fn update_locker(&self, request: &UpdateLockerRequest) -> Result<ApiEnvelope, SyncError> {
        let url = self.locker_url(&Operation::UpdateLocker, "/locker/update", &request.locker_id)?;
        self.execute(Operation::UpdateLocker, self.client.put(url).json(request))
    }

    /// `POST /locker/command`
    pub fn send_command(
        &self,
        locker_id: &str,
        command: LockerCommand,
    ) -> Result<CommandResponse, SyncError> {
        let url = self.config.api_url("/locker/command");
        let body = CommandRequest {
            id: locker_id,
            command,
        };
        let operation = Operation::Command {
            command,
            locker_id: locker_id.to_string(),
        };
        self.execute(operation, self.client.post(&url).json(&body))
    }

    /// `{endpoint}/{lockerId}` with the id percent-encoded as one path segment
    fn locker_url(
        &self,
        operation: &Operation,
        endpoint: &str,
        locker_id: &str,
    ) -> Result<Url, SyncError> {
        let invalid = |message: String| {
            SyncError::transport(operation.clone(), None, format!("Invalid request URL: {}", message))
        };
        let mut url = Url::parse(&self.config.api_url(endpoint)).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("{} cannot take a path segment", endpoint)))?
            .pop_if_empty()
            .push(locker_id);
        Ok(url)
    }

    fn execute<T>(&self, operation: Operation, request: RequestBuilder) -> Result<T, SyncError>
    where
        T: DeserializeOwned + ServiceReply,
    {
        tracing::debug!(operation = %operation, "Sending request");

        let reply: T = self.runtime.block_on(async {
            let response = request.send().await.map_err(|e| {
                SyncError::transport(
                    operation.clone(),
                    e.status().map(|s| s.as_u16()),
                    format!("Network error: {}", e),
                )
            })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SyncError::transport(
                    operation.clone(),
                    Some(status.as_u16()),
                    describe_status(status, &body),
                ));
            }

            response.json::<T>().await.map_err(|e| {
                SyncError::transport(
                    operation.clone(),
                    Some(status.as_u16()),
                    format!("Failed to parse response: {}", e),
                )
            })
        })?;

        if !reply.success() {
            let message = reply
                .message()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(REJECTED_WITHOUT_MESSAGE);
            return Err(SyncError::business(operation, message));
        }

        Ok(reply)
    }
}

/// Human-readable text for a non-2xx response, preferring the service's own
/// `message` when the body carries one.
fn describe_status(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<ApiEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        format!("Request failed: {}", status)
    } else {
        format!("Request failed: {} - {}", status, message)
    }
}
