//! Integration test harness for Dresshaus.
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`
//! against a throwaway data directory, so tests exercise the real handler,
//! service, and store layers without binding a socket.
//!
//! ```rust,no_run
//! # async fn demo() {
//! use dresshaus_integration_tests::TestApp;
//! use serde_json::json;
//!
//! let app = TestApp::new();
//! let (status, body) = app
//!     .post("/api/auth/signup", json!({
//!         "name": "Asha",
//!         "email": "asha@example.com",
//!         "password": "hunter22",
//!     }))
//!     .await;
//! assert_eq!(status, 200);
//! assert_eq!(body["success"], true);
//! # }
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use dresshaus_server::build_router;
use dresshaus_server::config::ServerConfig;
use dresshaus_server::state::AppState;
use dresshaus_server::store::JsonStore;

/// One application instance over a throwaway data directory.
///
/// The directory is removed when the `TestApp` drops.
pub struct TestApp {
    router: Router,
    data_dir: tempfile::TempDir,
}

impl TestApp {
    /// Build the app with test configuration.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().unwrap();

        let config = ServerConfig {
            data_dir: data_dir.path().to_path_buf(),
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            reset_secret: SecretString::from("kR8#mW2$pL5!qX9@tB4&vN7*yF0^zC3d"),
            ping_message: "ping".to_owned(),
        };

        let store = JsonStore::new(&config.data_dir);
        store.ensure_data_dir().unwrap();

        let router = build_router(AppState::new(config, store));
        Self { router, data_dir }
    }

    /// Direct handle on the app's collection files, for seeding and
    /// asserting on persisted state.
    #[must_use]
    pub fn store(&self) -> JsonStore {
        JsonStore::new(self.data_dir.path())
    }

    /// Send a request and return `(status, parsed JSON body)`.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
