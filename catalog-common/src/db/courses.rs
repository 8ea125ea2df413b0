//! Flat course collection

use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::model::{Course, CourseRecord};
use crate::{Error, Result};

const COURSE_COLUMNS: &str = "guid, code, description, units, specialization, tags";

#[derive(Debug, FromRow)]
struct CourseRow {
    guid: String,
    code: String,
    description: String,
    units: f64,
    specialization: String,
    tags: Json<Vec<String>>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.guid,
            record: CourseRecord {
                code: row.code,
                description: row.description,
                units: row.units,
                specialization: row.specialization,
                tags: row.tags.0,
            },
        }
    }
}

fn not_found() -> Error {
    Error::NotFound("Course not found".to_string())
}

/// Handle on the flat course collection
#[derive(Debug, Clone)]
pub struct CourseStore {
    pool: SqlitePool,
}

impl CourseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All courses in insertion order
    pub async fn list(&self) -> Result<Vec<Course>> {
        let sql = format!("SELECT {} FROM courses ORDER BY rowid", COURSE_COLUMNS);
        let rows = sqlx::query_as::<_, CourseRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    /// Course with identifier `id`
    pub async fn get(&self, id: &str) -> Result<Course> {
        let sql = format!("SELECT {} FROM courses WHERE guid = ?", COURSE_COLUMNS);
        sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Course::from)
            .ok_or_else(not_found)
    }

    /// Store a new course under a fresh identifier
    pub async fn insert(&self, record: CourseRecord) -> Result<Course> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO courses (guid, code, description, units, specialization, tags)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&record.code)
        .bind(&record.description)
        .bind(record.units)
        .bind(&record.specialization)
        .bind(Json(&record.tags))
        .execute(&self.pool)
        .await?;

        debug!("Inserted course {} ({})", id, record.code);
        Ok(Course { id, record })
    }

    /// Replace every field of course `id`, returning the updated course
    pub async fn update(&self, id: &str, record: CourseRecord) -> Result<Course> {
        let sql = format!(
            "UPDATE courses
             SET code = ?, description = ?, units = ?, specialization = ?, tags = ?
             WHERE guid = ?
             RETURNING {}",
            COURSE_COLUMNS
        );

        let updated = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(&record.code)
            .bind(&record.description)
            .bind(record.units)
            .bind(&record.specialization)
            .bind(Json(&record.tags))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Course::from)
            .ok_or_else(not_found)?;

        debug!("Updated course {}", id);
        Ok(updated)
    }

    /// Remove course `id`, returning what was removed
    pub async fn delete(&self, id: &str) -> Result<Course> {
        let sql = format!("DELETE FROM courses WHERE guid = ? RETURNING {}", COURSE_COLUMNS);

        let removed = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Course::from)
            .ok_or_else(not_found)?;

        debug!("Deleted course {}", id);
        Ok(removed)
    }
}
