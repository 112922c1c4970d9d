//! Dashboard HTTP API Tests
//!
//! Drives the router in-process:
//! - Page and static assets
//! - Layout and summary endpoints
//! - Figure endpoints for both charts, including rejected ranges

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use launchdash_core::dashboard::{DashboardConfig, DashboardServer, PageLayout, TableSummary};
use launchdash_core::RangeMode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn server(range_mode: RangeMode) -> DashboardServer {
    let config = DashboardConfig {
        range_mode,
        ..DashboardConfig::default()
    };
    DashboardServer::new(config, Arc::new(common::launch_table()))
}

async fn get(server: &DashboardServer, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("router should respond");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, body.to_vec())
}

async fn get_json(server: &DashboardServer, uri: &str) -> Value {
    let (status, body) = get(server, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    serde_json::from_slice(&body).expect("body should be JSON")
}

// =============================================================================
// Page
// =============================================================================

#[tokio::test]
async fn index_serves_dashboard_page() {
    let (status, body) = get(&server(RangeMode::AxisBound), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("success-pie-chart"));
    assert!(html.contains("success-payload-scatter-chart"));
}

#[tokio::test]
async fn static_assets_resolve_and_unknown_is_404() {
    let srv = server(RangeMode::AxisBound);
    let (status, _) = get(&srv, "/static/app.js").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&srv, "/static/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn layout_bounds_slider_by_dataset() {
    let value = get_json(&server(RangeMode::AxisBound), "/api/layout").await;
    let layout: PageLayout = serde_json::from_value(value).unwrap();

    assert_eq!(layout.dropdown.options.len(), 5);
    assert_eq!(layout.dropdown.options[0].value, "ALL");
    assert_eq!(layout.slider.min, 0.0);
    assert_eq!(layout.slider.step, 1000.0);
    assert_eq!(layout.slider.bounds.max, 9600.0);
    assert_eq!(layout.slider.value, [0.0, 9600.0]);

    // 9600 is not a multiple of the step; the input must still reach it
    let slider = &layout.slider;
    assert!(slider.reachable_max() >= slider.bounds.max);
    assert_eq!(
        slider.selected_range(slider.min, slider.reachable_max()),
        (0.0, 9600.0)
    );
}

#[tokio::test]
async fn summary_reports_loaded_table() {
    let value = get_json(&server(RangeMode::AxisBound), "/api/summary").await;
    let summary: TableSummary = serde_json::from_value(value).unwrap();

    assert_eq!(summary.records, 12);
    assert_eq!(summary.sites.len(), 4);
    assert_eq!(summary.source, "fixture");
}

// =============================================================================
// Figures
// =============================================================================

#[tokio::test]
async fn pie_defaults_to_all_sites() {
    let fig = get_json(&server(RangeMode::AxisBound), "/api/figures/success-pie").await;

    assert_eq!(fig["layout"]["title"]["text"], "Successes by Site");
    assert_eq!(
        fig["data"][0]["labels"],
        json!(["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"])
    );
    assert_eq!(fig["data"][0]["values"], json!([1, 1, 2, 2]));
}

#[tokio::test]
async fn pie_for_site_counts_outcomes() {
    let fig = get_json(
        &server(RangeMode::AxisBound),
        "/api/figures/success-pie?site=KSC%20LC-39A",
    )
    .await;

    assert_eq!(fig["layout"]["title"]["text"], "Successes at KSC LC-39A");
    assert_eq!(fig["data"][0]["labels"], json!(["0", "1"]));
    assert_eq!(fig["data"][0]["values"], json!([1, 2]));
}

#[tokio::test]
async fn scatter_defaults_range_to_dataset_bounds() {
    let fig = get_json(&server(RangeMode::AxisBound), "/api/figures/payload-scatter").await;

    assert_eq!(fig["layout"]["xaxis"]["range"], json!([0.0, 9600.0]));
    let points: usize = fig["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|trace| trace["x"].as_array().unwrap().len())
        .sum();
    assert_eq!(points, 12);
}

#[tokio::test]
async fn scatter_range_mode_controls_row_filtering() {
    let uri = "/api/figures/payload-scatter?site=CCAFS%20LC-40&low=500&high=1000";

    let axis = get_json(&server(RangeMode::AxisBound), uri).await;
    let axis_points: usize = axis["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|trace| trace["x"].as_array().unwrap().len())
        .sum();
    assert_eq!(axis_points, 5);
    assert_eq!(axis["layout"]["xaxis"]["range"], json!([500.0, 1000.0]));

    let filtered = get_json(&server(RangeMode::RowFilter), uri).await;
    assert_eq!(filtered["data"].as_array().unwrap().len(), 1);
    assert_eq!(filtered["data"][0]["x"], json!([525.0, 677.0]));
}

#[tokio::test]
async fn scatter_rejects_reversed_range() {
    let (status, _) = get(
        &server(RangeMode::AxisBound),
        "/api/figures/payload-scatter?low=5000&high=100",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_site_yields_empty_figures() {
    let srv = server(RangeMode::AxisBound);
    let pie = get_json(&srv, "/api/figures/success-pie?site=Nowhere").await;
    assert_eq!(pie["data"][0]["labels"], json!([]));

    let scatter = get_json(&srv, "/api/figures/payload-scatter?site=Nowhere").await;
    assert_eq!(scatter["data"], json!([]));
}
