//! Identifier-keyed course CRUD
//!
//! Writes require the complete course shape; a body that fails validation
//! never reaches the store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_common::api::{ApiError, GREETING};
use catalog_common::model::{Course, CourseRecord};
use catalog_common::validation::validate_course;
use serde_json::Value;
use tracing::info;

use crate::AppState;

/// Validate a JSON body (or its rejection) as a full course record
fn validated_body(payload: Result<Json<Value>, JsonRejection>) -> Result<CourseRecord, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    Ok(validate_course(&body)?)
}

/// GET /
pub async fn greeting() -> &'static str {
    GREETING
}

/// GET /api/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(state.courses.get(&id).await?))
}

/// POST /api/courses
///
/// Store a new course; 201 with the stored record.
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let record = validated_body(payload)?;
    let course = state.courses.insert(record).await?;
    info!("Created course {} ({})", course.id, course.record.code);
    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/courses/:id
///
/// Replace every field of an existing course.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Course>, ApiError> {
    let record = validated_body(payload)?;
    let course = state.courses.update(&id, record).await?;
    info!("Updated course {}", id);
    Ok(Json(course))
}

/// DELETE /api/courses/:id
///
/// Remove a course and return it.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let course = state.courses.delete(&id).await?;
    info!("Deleted course {}", id);
    Ok(Json(course))
}
