// Dashboard HTTP API server
//
// Serves the page, its assets and one figure endpoint per chart

use crate::aggregator::{
    payload_correlation, success_distribution, PayloadRange, RangeMode, SiteSelection, ALL_SITES,
};
use crate::dashboard::layout::PageLayout;
use crate::dashboard::DashboardConfig;
use crate::dataset::{LaunchTable, PayloadBounds};
use crate::figure::{pie_figure, scatter_figure, Figure};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

/// Dashboard server state
#[derive(Clone)]
struct DashboardState {
    table: Arc<LaunchTable>,
    layout: Arc<PageLayout>,
    range_mode: RangeMode,
}

/// Dashboard HTTP server
pub struct DashboardServer {
    config: DashboardConfig,
    table: Arc<LaunchTable>,
}

impl DashboardServer {
    pub fn new(config: DashboardConfig, table: Arc<LaunchTable>) -> Self {
        Self { config, table }
    }

    /// Build the router without binding a socket
    pub fn router(&self) -> Router {
        let state = DashboardState {
            layout: Arc::new(PageLayout::from_table(&self.table, self.config.payload_step)),
            table: Arc::clone(&self.table),
            range_mode: self.config.range_mode,
        };

        Router::new()
            .route("/", get(index_handler))
            .route("/static/*asset", get(static_asset_handler))
            .route("/api/layout", get(layout_handler))
            .route("/api/summary", get(summary_handler))
            .route("/api/figures/success-pie", get(pie_handler))
            .route("/api/figures/payload-scatter", get(scatter_handler))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state)
    }

    /// Start the Dashboard server
    pub async fn serve(self) -> crate::Result<()> {
        let addr = self.config.addr();
        info!(
            target: "dashboard",
            addr = %addr,
            range_mode = ?self.config.range_mode,
            "Starting Dashboard server"
        );

        let app = self.router();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            target: "dashboard",
            url = %format!("http://{}", addr),
            "Dashboard server ready"
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Serve the main HTML page
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>Launch Records Dashboard</title></head><body><h1>Dashboard assets not found</h1></body></html>"#;

async fn index_handler() -> Html<&'static str> {
    let html = crate::dashboard::static_assets::get_text("index.html").unwrap_or(FALLBACK_INDEX);
    Html(html)
}

async fn static_asset_handler(Path(asset): Path<String>) -> impl IntoResponse {
    match crate::dashboard::static_assets::get(asset.as_str()) {
        Some(asset) => {
            let mut headers = HeaderMap::new();
            if let Ok(value) = header::HeaderValue::from_str(asset.content_type) {
                headers.insert(header::CONTENT_TYPE, value);
            }
            (StatusCode::OK, headers, asset.body).into_response()
        }
        None => {
            let headers = HeaderMap::new();
            (StatusCode::NOT_FOUND, headers, b"Not found".as_slice()).into_response()
        }
    }
}

async fn layout_handler(State(state): State<DashboardState>) -> Json<PageLayout> {
    Json(state.layout.as_ref().clone())
}

/// Loaded dataset overview
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableSummary {
    pub source: String,
    pub loaded_at: String,
    pub records: usize,
    pub sites: Vec<String>,
    pub payload_bounds: PayloadBounds,
}

async fn summary_handler(State(state): State<DashboardState>) -> Json<TableSummary> {
    let table = &state.table;
    Json(TableSummary {
        source: table.source().to_string(),
        loaded_at: table.loaded_at().to_string(),
        records: table.len(),
        sites: table.sites().to_vec(),
        payload_bounds: table.payload_bounds(),
    })
}

fn default_site() -> String {
    ALL_SITES.to_string()
}

#[derive(Deserialize)]
struct PieQuery {
    #[serde(default = "default_site")]
    site: String,
}

/// Pie chart figure for the selected site
async fn pie_handler(
    State(state): State<DashboardState>,
    Query(query): Query<PieQuery>,
) -> Json<Figure> {
    let selection = SiteSelection::parse(&query.site);
    let dist = success_distribution(&state.table, &selection);
    debug!(
        target: "dashboard",
        site = %selection,
        slices = dist.slices.len(),
        "Success distribution computed"
    );
    Json(pie_figure(&dist))
}

/// Query params: ?site=ALL&low=0&high=9600 (low/high default to the dataset bounds)
#[derive(Deserialize)]
struct ScatterQuery {
    #[serde(default = "default_site")]
    site: String,
    low: Option<f64>,
    high: Option<f64>,
}

/// Scatter chart figure for the selected site and payload range
async fn scatter_handler(
    State(state): State<DashboardState>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<Figure>, StatusCode> {
    let bounds = state.table.payload_bounds();
    let low = query.low.unwrap_or(bounds.min);
    let high = query.high.unwrap_or(bounds.max);
    let range = match PayloadRange::new(low, high) {
        Ok(range) => range,
        Err(e) => {
            warn!(target: "dashboard", error = %e, "Rejected payload range");
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let selection = SiteSelection::parse(&query.site);
    let view = payload_correlation(&state.table, &selection, range, state.range_mode);
    debug!(
        target: "dashboard",
        site = %selection,
        low,
        high,
        points = view.points.len(),
        "Payload correlation computed"
    );
    Ok(Json(scatter_figure(&view)))
}
