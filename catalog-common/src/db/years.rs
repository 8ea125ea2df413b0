//! Year document collection
//!
//! Year documents are only written by import; the year-document service
//! itself is read-only.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::model::{YearCourses, YearDocument};
use crate::validation::validate_year_courses;
use crate::Result;

#[derive(Debug, FromRow)]
struct YearDocumentRow {
    guid: String,
    body: Json<YearCourses>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<YearDocumentRow> for YearDocument {
    fn from(row: YearDocumentRow) -> Self {
        YearDocument {
            id: row.guid,
            years: row.body.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Handle on the year document collection
#[derive(Debug, Clone)]
pub struct YearStore {
    pool: SqlitePool,
}

impl YearStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All year documents in insertion order
    pub async fn list(&self) -> Result<Vec<YearDocument>> {
        let rows = sqlx::query_as::<_, YearDocumentRow>(
            "SELECT guid, body, created_at, updated_at FROM year_documents ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(YearDocument::from).collect())
    }

    /// Store a new year document under a fresh identifier
    ///
    /// Every embedded course is checked first; nothing is written if one fails.
    pub async fn insert(&self, years: YearCourses) -> Result<YearDocument> {
        validate_year_courses(&years)?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO year_documents (guid, body, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(Json(&years))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!("Inserted year document {}", id);
        Ok(YearDocument {
            id,
            years,
            created_at: now,
            updated_at: now,
        })
    }
}
