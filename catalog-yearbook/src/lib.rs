//! catalog-yearbook library - read-only service over year documents
//!
//! Serves course listings flattened out of the per-year documents. The same
//! binary backs both deployments; only the route prefix differs.

use axum::Router;
use catalog_common::db::YearStore;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Year document collection (read-only use)
    pub years: YearStore,
}

impl AppState {
    /// Create new application state
    pub fn new(years: YearStore) -> Self {
        Self { years }
    }
}

/// Build application router with course routes nested under `route_prefix`
pub fn build_router(state: AppState, route_prefix: &str) -> Router {
    use axum::routing::get;

    let courses = Router::new()
        .route("/sortedByName", get(api::sorted_by_name))
        .route("/nameAndSpecialization", get(api::name_and_specialization))
        .route("/publishedCourses", get(api::published_courses));

    let public = Router::new()
        .route("/", get(api::greeting))
        .merge(api::health_routes());

    Router::new()
        .nest(route_prefix, courses)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
