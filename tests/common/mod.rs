//! Common test utilities for integration tests.
//!
//! Provides a mock-backed App builder, canned response bodies, and a pump
//! helper that drains in-flight async work into the app.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use verdant::adapters::mock::{MockHttpClient, MockResponse};
use verdant::api::PlantCareClient;
use verdant::app::App;
use verdant::config::ClientConfig;
use verdant::traits::Response;

/// Base URL used by mock-backed tests (never dialed).
pub const BASE: &str = "http://plantcare.test/api";

/// Full URL for an API path under [`BASE`].
pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// Config pointing at the mock base URL, with OS notifications off.
pub fn test_config() -> ClientConfig {
    ClientConfig::default()
        .with_base_url(BASE)
        .with_notifications(false)
}

/// Build an App wired to a mock HTTP client.
///
/// The returned mock handle shares state with the one inside the app, so
/// tests can configure responses and inspect recorded requests.
pub fn mock_app() -> (App, MockHttpClient) {
    let mock = MockHttpClient::new();
    let client = PlantCareClient::with_http(BASE, Arc::new(mock.clone()));
    let app = App::with_client(test_config(), Arc::new(client));
    (app, mock)
}

/// A 200 response with a JSON body.
pub fn ok_json(body: &str) -> MockResponse {
    MockResponse::Success(Response::new(200, Bytes::from(body.to_string())))
}

/// JSON body for a plant list.
pub fn plants_body(plants: &[(&str, &str, &str)]) -> String {
    let entries: Vec<String> = plants
        .iter()
        .map(|(id, name, plant_type)| {
            format!(
                r#"{{"id":"{}","name":"{}","plant_type":"{}","created_at":"2026-08-01T10:00:00Z","health_status":"healthy"}}"#,
                id, name, plant_type
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// JSON body for an alert list. Each entry: (id, resolved, timestamp).
pub fn alerts_body(alerts: &[(&str, bool, &str)]) -> String {
    let entries: Vec<String> = alerts
        .iter()
        .map(|(id, resolved, timestamp)| {
            format!(
                r#"{{"id":"{}","plant_id":"p1","alert_type":"disease_detected","message":"alert {}","severity":"medium","timestamp":"{}","resolved":{}}}"#,
                id, id, timestamp, resolved
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// JSON body for the dashboard aggregate.
pub fn stats_body(total_plants: u64, active_alerts: u64, health_percentage: f64) -> String {
    format!(
        r#"{{"total_plants":{},"total_detections":6,"active_alerts":{},"healthy_plants":4,"health_percentage":{}}}"#,
        total_plants, active_alerts, health_percentage
    )
}

/// JSON body for a detection report.
pub fn report_body(disease: &str, confidence: f64) -> String {
    format!(
        r#"{{"disease_name":"{}","confidence":{},"severity":"Medium","description":"Dark concentric spots on lower leaves.","treatment":"Remove affected leaves and apply fungicide.","recommendations":["Remove affected leaves","Apply fungicide"]}}"#,
        disease, confidence
    )
}

/// Drain spawned async work and apply every resulting message to the app.
///
/// Keeps draining while handlers schedule follow-up loads, and returns once
/// the channel stays quiet.
pub async fn pump(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver taken");
    loop {
        tokio::task::yield_now().await;
        match tokio::time::timeout(Duration::from_millis(100), rx.recv()).await {
            Ok(Some(msg)) => app.handle_message(msg),
            _ => break,
        }
    }
    app.message_rx = Some(rx);
}
