//! Health check endpoint

use axum::{routing::get, Json, Router};
use catalog_common::api::HealthResponse;

use crate::AppState;

/// GET /health
///
/// Does not touch the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok("catalog-api", env!("CARGO_PKG_VERSION")))
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
