//! Course listings flattened from year documents
//!
//! Every handler reads the whole collection, flattens it in year order and
//! then sorts, filters or projects the result.

use axum::{extract::State, Json};
use catalog_common::api::{ApiError, GREETING};
use catalog_common::model::{CourseRecord, ProjectedCourse};
use catalog_common::normalize::flatten;
use catalog_common::projection::project;
use catalog_common::query::{filter_by_tags, sort_by_description, PUBLISHED_TAGS};
use tracing::debug;

use crate::AppState;

/// Current snapshot of every course across all year documents
async fn all_courses(state: &AppState) -> Result<Vec<CourseRecord>, ApiError> {
    let documents = state.years.list().await?;
    let courses = flatten(documents.iter().map(|d| &d.years));
    debug!(
        "Flattened {} year documents into {} courses",
        documents.len(),
        courses.len()
    );
    Ok(courses)
}

/// GET /
pub async fn greeting() -> &'static str {
    GREETING
}

/// GET {prefix}/sortedByName
///
/// All courses ordered by description.
pub async fn sorted_by_name(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseRecord>>, ApiError> {
    let mut courses = all_courses(&state).await?;
    sort_by_description(&mut courses);
    Ok(Json(courses))
}

/// GET {prefix}/nameAndSpecialization
///
/// Description and tags of every course, in year order.
pub async fn name_and_specialization(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectedCourse>>, ApiError> {
    let courses = all_courses(&state).await?;
    Ok(Json(project(&courses)))
}

/// GET {prefix}/publishedCourses
///
/// Description and tags of courses tagged for the BSIT or BSIS programs.
pub async fn published_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectedCourse>>, ApiError> {
    let courses = all_courses(&state).await?;
    Ok(Json(project(filter_by_tags(&courses, &PUBLISHED_TAGS))))
}
