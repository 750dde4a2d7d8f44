//! Mock locker service helpers for integration tests
//!
//! Wraps a mockito server with one helper per locker endpoint and builds
//! clients, controllers and app state pointed at it.

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::path::Path;

use lockerdesk::egui_app::{ActivityLog, AppState, Config, LockerApiClient, MemoryClipboard, SyncController};
use lockerdesk::shared::AppConfig;

use super::fixtures::list_body;

pub struct MockLockerService {
    pub server: ServerGuard,
}

impl MockLockerService {
    pub fn start() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    pub fn config(&self) -> Config {
        Config::with_builder(AppConfig::builder().server_url(self.url()))
            .expect("mock server url is valid")
    }

    /// Config whose map page is written under `dir`
    pub fn config_in(&self, dir: &Path) -> Config {
        Config::with_builder(
            AppConfig::builder()
                .server_url(self.url())
                .map_output(dir.join("lockers_map.html")),
        )
        .expect("mock server url is valid")
    }

    pub fn client(&self) -> LockerApiClient {
        LockerApiClient::new(self.config()).expect("runtime builds")
    }

    pub fn controller(&self) -> SyncController {
        self.controller_with(MemoryClipboard::new())
    }

    pub fn controller_with(&self, clipboard: MemoryClipboard) -> SyncController {
        SyncController::new(self.client(), ActivityLog::new(100), Box::new(clipboard))
    }

    /// App state with its initial refresh still queued
    pub fn app_state(&self, dir: &Path) -> AppState {
        AppState::new(self.config_in(dir), Box::new(MemoryClipboard::new())).expect("runtime builds")
    }

    /// `GET /locker/all` answering with `lockers`, expected `hits` times
    pub fn mock_list(&mut self, lockers: &[serde_json::Value], hits: usize) -> Mock {
        self.server
            .mock("GET", "/locker/all")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(list_body(lockers))
            .expect(hits)
            .create()
    }

    pub fn mock_list_status(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", "/locker/all")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    pub fn mock_register(&mut self, body: &str) -> Mock {
        self.server
            .mock("POST", "/locker/register")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create()
    }

    pub fn mock_delete(&mut self, locker_id: &str, body: &str) -> Mock {
        self.server
            .mock("DELETE", format!("/locker/delete/{}", locker_id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create()
    }

    /// Any delete at all; used to prove none was sent
    pub fn mock_any_delete(&mut self) -> Mock {
        self.server
            .mock("DELETE", Matcher::Regex(r"^/locker/delete/.*$".to_string()))
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .expect(0)
            .create()
    }

    pub fn mock_update(&mut self, locker_id: &str, expected: serde_json::Value, body: &str) -> Mock {
        self.server
            .mock("PUT", format!("/locker/update/{}", locker_id).as_str())
            .match_body(Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create()
    }

    pub fn mock_any_update(&mut self) -> Mock {
        self.server
            .mock("PUT", Matcher::Regex(r"^/locker/update/.*$".to_string()))
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .expect(0)
            .create()
    }

    pub fn mock_command(&mut self, expected: serde_json::Value, body: &str) -> Mock {
        self.server
            .mock("POST", "/locker/command")
            .match_body(Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create()
    }
}
