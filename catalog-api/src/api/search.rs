//! Course searches and listings
//!
//! Matching is literal: query parameters are never interpreted as patterns.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use catalog_common::api::ApiError;
use catalog_common::model::Course;
use catalog_common::query::{
    filter_by_tag_fragment, group_by_code_prefix, search_by_name, search_by_specialization,
    sort_by_description, BACKEND_TAG, PROGRAM_PREFIXES,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::AppState;

/// Unwrap query parameters, reporting a malformed query string as a 400
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|e| ApiError::InvalidRequest(e.body_text()))
}

/// Query parameters for name search
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    /// Fragment of the course description
    pub name: Option<String>,
}

/// Query parameters for specialization search
#[derive(Debug, Deserialize)]
pub struct SpecializationQuery {
    /// Fragment of the course specialization
    pub specialization: Option<String>,
}

/// GET /api/courses/backend
///
/// Courses with a tag containing "backend", sorted by description.
/// 404 when there are none.
pub async fn backend_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let mut courses = filter_by_tag_fragment(state.courses.list().await?, BACKEND_TAG);

    if courses.is_empty() {
        return Err(ApiError::NotFound("No backend courses were found.".to_string()));
    }

    sort_by_description(&mut courses);
    Ok(Json(courses))
}

/// GET /api/courses/byName?name=
///
/// First course whose description contains `name`, ignoring case.
pub async fn course_by_name(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Course>, ApiError> {
    let query = query_params(query)?;
    let courses = state.courses.list().await?;
    let course = search_by_name(courses, query.name.as_deref())?;
    Ok(Json(course))
}

/// GET /api/courses/specializ?specialization=
///
/// Every course whose specialization contains `specialization`, ignoring case.
pub async fn courses_by_specialization(
    State(state): State<AppState>,
    query: Result<Query<SpecializationQuery>, QueryRejection>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let query = query_params(query)?;
    let courses = state.courses.list().await?;
    let matches = search_by_specialization(courses, query.specialization.as_deref())?;
    debug!("Specialization search matched {} courses", matches.len());
    Ok(Json(matches))
}

/// GET /api/courses/bsis-bsit
///
/// `{ "BSIS": [...], "BSIT": [...] }` grouped by code prefix. Empty groups
/// are returned as empty arrays.
pub async fn program_courses(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<Course>>>, ApiError> {
    let courses = state.courses.list().await?;
    Ok(Json(group_by_code_prefix(&courses, &PROGRAM_PREFIXES)))
}

/// GET /api/courses/allCourses
///
/// Every course sorted by description.
pub async fn all_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let mut courses = state.courses.list().await?;
    sort_by_description(&mut courses);
    Ok(Json(courses))
}
