#![allow(dead_code)]

//! Shared helpers for the logscope integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file. Helpers fake the remote log source with `wiremock`, so
//! every harness exercises the real HTTP client.

use std::sync::Once;
use std::time::Duration;

use logscope::{ClientConfig, Engine};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockGuard, MockServer, ResponseTemplate};

static TRACING: Once = Once::new();

/// Route every harness through the same quiet subscriber
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::WARN.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}

// ---------------------------------------------------------------------------
// Wire payload builders
// ---------------------------------------------------------------------------

/// One log record in wire form
pub fn wire_record(level: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "timestamp": "2024-01-01 10:00:00",
        "level": level,
        "message": message,
    })
}

/// One log record in wire form, tagged with a category
pub fn wire_record_in(category: &str, level: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "timestamp": "2024-01-01 10:00:00",
        "level": level,
        "message": message,
        "category": category,
    })
}

/// Successful snapshot payload wrapping the given records
pub fn snapshot_body(logs: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "ok": true, "logs": logs })
}

/// The five-record scenario used across harnesses:
/// two info, one warning, one error, one debug
pub fn sample_body() -> serde_json::Value {
    snapshot_body(vec![
        wire_record("info", "server started"),
        wire_record("info", "player joined"),
        wire_record("warning", "high latency"),
        wire_record("error", "connection lost"),
        wire_record("debug", "tick 42"),
    ])
}

// ---------------------------------------------------------------------------
// Mock endpoints
// ---------------------------------------------------------------------------

/// Serve the body for `GET /logs` until the returned guard drops
pub async fn serve_snapshot(server: &MockServer, body: serde_json::Value) -> MockGuard {
    Mock::given(method("GET"))
        .and(path("/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount_as_scoped(server)
        .await
}

/// Answer `DELETE /logs` with `{ ok: true }` until the returned guard drops
pub async fn serve_clear_ok(server: &MockServer) -> MockGuard {
    Mock::given(method("DELETE"))
        .and(path("/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount_as_scoped(server)
        .await
}

// ---------------------------------------------------------------------------
// Engine wiring
// ---------------------------------------------------------------------------

/// Engine wired to the mock server, with default tuning
pub fn engine_for(server: &MockServer) -> Engine {
    init_tracing();
    Engine::new(ClientConfig::new(server.uri())).unwrap()
}

/// Poll until `check` passes or the deadline expires; returns the final verdict
pub async fn wait_until<F: Fn() -> bool>(check: F, deadline: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
