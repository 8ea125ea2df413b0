//! Seed import from JSON files
//!
//! - year-document seeds: a JSON array of objects keyed by "1st Year" ..
//!   "4th Year"
//! - course seeds: a JSON array of full course records, each validated like a
//!   write request

use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::db::{CourseStore, YearStore};
use crate::model::{CourseRecord, YearCourses};
use crate::validation::{validate_course, validate_year_courses};
use crate::{Error, Result};

async fn read_array(path: &Path) -> Result<Vec<Value>> {
    let content = tokio::fs::read_to_string(path).await?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Array(items) => Ok(items),
        _ => Err(Error::InvalidInput(format!(
            "Seed file {} must contain a JSON array",
            path.display()
        ))),
    }
}

/// Parse and check a year-document seed file
pub async fn load_year_documents(path: &Path) -> Result<Vec<YearCourses>> {
    read_array(path)
        .await?
        .into_iter()
        .enumerate()
        .map(|(i, item)| -> Result<YearCourses> {
            let years: YearCourses = serde_json::from_value(item)?;
            validate_year_courses(&years).map_err(|e| match e {
                Error::InvalidInput(msg) => {
                    Error::InvalidInput(format!("Seed document #{}, {}", i, msg))
                }
                other => other,
            })?;
            Ok(years)
        })
        .collect()
}

/// Parse and validate a course seed file
pub async fn load_courses(path: &Path) -> Result<Vec<CourseRecord>> {
    read_array(path)
        .await?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            validate_course(item).map_err(|e| match e {
                Error::InvalidInput(msg) => {
                    Error::InvalidInput(format!("Seed course #{}: {}", i, msg))
                }
                other => other,
            })
        })
        .collect()
}

/// Import every year document in `path`, returning how many were stored
///
/// The whole file is checked before anything is written.
pub async fn import_year_documents(store: &YearStore, path: &Path) -> Result<usize> {
    let documents = load_year_documents(path).await?;
    let count = documents.len();
    for years in documents {
        store.insert(years).await?;
    }
    info!("Imported {} year documents from {}", count, path.display());
    Ok(count)
}

/// Import every course in `path`, returning how many were stored
///
/// The whole file is validated before anything is written.
pub async fn import_courses(store: &CourseStore, path: &Path) -> Result<usize> {
    let courses = load_courses(path).await?;
    let count = courses.len();
    for record in courses {
        store.insert(record).await?;
    }
    info!("Imported {} courses from {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_database;
    use crate::model::YearKey;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_import_year_documents() {
        let file = seed_file(
            r#"[
                {"1st Year": [{"code": "CS101", "description": "Intro to Computing", "units": 3, "tags": ["BSIT"]}]},
                {"2nd Year": [{"code": "IS201", "description": "Database Systems", "units": 3, "tags": ["BSIS"]}]}
            ]"#,
        );
        let store = YearStore::new(init_memory_database().await.unwrap());

        let count = import_year_documents(&store, file.path()).await.unwrap();
        assert_eq!(count, 2);

        let docs = store.list().await.unwrap();
        assert_eq!(docs[0].years.get(YearKey::First).unwrap()[0].code, "CS101");
        assert_eq!(docs[1].years.get(YearKey::Second).unwrap()[0].code, "IS201");
    }

    #[tokio::test]
    async fn test_invalid_course_seed_writes_nothing() {
        let file = seed_file(
            r#"[
                {"code": "A", "description": "Alpha", "units": 3, "specialization": "S", "tags": ["BSIT"]},
                {"code": "B", "description": "Beta", "specialization": "S", "tags": ["BSIT"]}
            ]"#,
        );
        let store = CourseStore::new(init_memory_database().await.unwrap());

        let err = import_courses(&store, file.path()).await.unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert_eq!(msg, "Seed course #1: \"units\" is required"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_year_seed_writes_nothing() {
        let file = seed_file(
            r#"[
                {"1st Year": [{"code": "CS101", "description": "Intro to Computing", "units": 3, "tags": ["BSIT"]}]},
                {"1st Year": [{"code": "", "description": "", "units": 3, "tags": []}]}
            ]"#,
        );
        let store = YearStore::new(init_memory_database().await.unwrap());

        let err = import_year_documents(&store, file.path()).await.unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert_eq!(
                msg,
                "Seed document #1, \"1st Year\"[0]: \"code\" is not allowed to be empty"
            ),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_must_be_array() {
        let file = seed_file(r#"{"code": "A"}"#);
        assert!(matches!(
            load_courses(file.path()).await,
            Err(Error::InvalidInput(_))
        ));

        let file = seed_file("not json");
        assert!(matches!(
            load_year_documents(file.path()).await,
            Err(Error::Serialization(_))
        ));
    }
}
