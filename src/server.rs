//! Read-only JSON HTTP API.
//!
//! Serves the same catalog the CLI reads, for browser front-ends and other
//! tools that want to render star cards and charts.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/health` | Health check (returns version) |
//! | `GET`  | `/stars` | Filtered star list (`q`, `hide_empty`, `limit`, `offset`) |
//! | `GET`  | `/stars/{index}` | One star, full comment included |
//! | `GET`  | `/stats` | Play-time histogram and daily completions |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "not_found", "message": "star index 9 out of range" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so browser pages on any
//! host can call the API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::get::get_star;
use crate::stats::Stats;
use crate::view::StarView;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    /// Used when a request does not say whether to hide unnamed stars.
    hide_empty_default: bool,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, hide_empty_default: bool) -> Self {
        Self {
            catalog,
            hide_empty_default,
        }
    }
}

/// Build the API router over an already loaded catalog.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/stars", get(handle_list_stars))
        .route("/stars/{index}", get(handle_get_star))
        .route("/stats", get(handle_stats))
        .layer(cors)
        .with_state(state)
}

/// Starts the HTTP server.
///
/// Binds to `[server].bind` and runs until the process is terminated.
pub async fn run_server(config: &Config, catalog: Catalog) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let state = AppState::new(Arc::new(catalog), config.browse.hide_empty);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(bind = %bind_addr, "server started");
    println!("Galaxy API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`, `"not_found"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /stars ============

#[derive(Debug, Deserialize, Default)]
struct StarsQuery {
    #[serde(default)]
    q: String,
    hide_empty: Option<bool>,
    limit: Option<usize>,
    #[serde(default)]
    offset: usize,
}

#[derive(Serialize)]
struct StarsResponse {
    /// Stars in the dataset.
    total: usize,
    /// Stars matching the query, before `offset`/`limit`.
    matched: usize,
    stars: Vec<StarView>,
}

/// Handler for `GET /stars`.
///
/// Malformed query parameters (e.g. `limit=abc`) are returned as a
/// `bad_request` error body.
async fn handle_list_stars(
    State(state): State<AppState>,
    query: Result<Query<StarsQuery>, QueryRejection>,
) -> Result<Json<StarsResponse>, AppError> {
    let Query(params) = query.map_err(|rejection| bad_request(rejection.body_text()))?;
    let hide_empty = params.hide_empty.unwrap_or(state.hide_empty_default);
    let (matched, stars) = state
        .catalog
        .search(&params.q, hide_empty, params.offset, params.limit);

    tracing::debug!(q = %params.q, hide_empty, matched, "GET /stars");

    Ok(Json(StarsResponse {
        total: state.catalog.index().len(),
        matched,
        stars,
    }))
}

// ============ GET /stars/{index} ============

async fn handle_get_star(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<StarView>, AppError> {
    let index: usize = index
        .parse()
        .map_err(|_| bad_request(format!("invalid star index: {}", index)))?;

    get_star(&state.catalog, index)
        .map(Json)
        .map_err(|e| not_found(e.to_string()))
}

// ============ GET /stats ============

async fn handle_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.catalog.stats().clone())
}
