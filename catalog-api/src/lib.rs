//! catalog-api library - flat course collection service
//!
//! Search, program grouping and identifier-keyed CRUD over the flat
//! `courses` collection.

use axum::Router;
use catalog_common::db::CourseStore;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Flat course collection
    pub courses: CourseStore,
}

impl AppState {
    /// Create new application state
    pub fn new(courses: CourseStore) -> Self {
        Self { courses }
    }
}

/// Build application router with course routes nested under `route_prefix`
///
/// Fixed search routes are matched before the `/:id` routes.
pub fn build_router(state: AppState, route_prefix: &str) -> Router {
    use axum::routing::{get, post};

    let courses = Router::new()
        .route("/", post(api::create_course))
        .route("/backend", get(api::backend_courses))
        .route("/byName", get(api::course_by_name))
        .route("/specializ", get(api::courses_by_specialization))
        .route("/bsis-bsit", get(api::program_courses))
        .route("/allCourses", get(api::all_courses))
        .route(
            "/:id",
            get(api::get_course)
                .put(api::update_course)
                .delete(api::delete_course),
        );

    let public = Router::new()
        .route("/", get(api::greeting))
        .merge(api::health_routes());

    Router::new()
        .nest(route_prefix, courses)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
