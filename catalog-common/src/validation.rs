//! Full-record validation for course writes
//!
//! Writes never accept partial records: every field must be present and
//! well-typed. Only the first failure is reported.

use serde_json::{Map, Value};

use crate::model::{CourseRecord, YearCourses, YearKey};
use crate::{Error, Result};

const FIELDS: [&str; 5] = ["code", "description", "units", "specialization", "tags"];

fn invalid(message: String) -> Error {
    Error::InvalidInput(message)
}

fn field<'a>(body: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    body.get(name)
        .ok_or_else(|| invalid(format!("\"{}\" is required", name)))
}

fn string_field(body: &Map<String, Value>, name: &str) -> Result<String> {
    match field(body, name)? {
        Value::String(s) if s.is_empty() => {
            Err(invalid(format!("\"{}\" is not allowed to be empty", name)))
        }
        Value::String(s) => Ok(s.clone()),
        _ => Err(invalid(format!("\"{}\" must be a string", name))),
    }
}

fn number_field(body: &Map<String, Value>, name: &str) -> Result<f64> {
    field(body, name)?
        .as_f64()
        .ok_or_else(|| invalid(format!("\"{}\" must be a number", name)))
}

fn tags_field(body: &Map<String, Value>, name: &str) -> Result<Vec<String>> {
    let items = field(body, name)?
        .as_array()
        .ok_or_else(|| invalid(format!("\"{}\" must be an array", name)))?;

    let tags = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid(format!("\"{}[{}]\" must be a string", name, i)))
        })
        .collect::<Result<Vec<String>>>()?;

    if tags.is_empty() {
        return Err(invalid(format!("\"{}\" must contain at least 1 items", name)));
    }
    Ok(tags)
}

/// Validate a request body against the full course shape
pub fn validate_course(body: &Value) -> Result<CourseRecord> {
    let body = body
        .as_object()
        .ok_or_else(|| invalid("\"value\" must be of type object".to_string()))?;

    let record = CourseRecord {
        code: string_field(body, "code")?,
        description: string_field(body, "description")?,
        units: number_field(body, "units")?,
        specialization: string_field(body, "specialization")?,
        tags: tags_field(body, "tags")?,
    };

    if let Some(key) = body.keys().find(|k| !FIELDS.contains(&k.as_str())) {
        return Err(invalid(format!("\"{}\" is not allowed", key)));
    }

    Ok(record)
}

/// Check a course embedded in a year document
///
/// Same rules as [`validate_course`] except that `specialization` may be
/// absent.
pub fn validate_embedded_course(record: &CourseRecord) -> Result<()> {
    for (name, value) in [("code", &record.code), ("description", &record.description)] {
        if value.is_empty() {
            return Err(invalid(format!("\"{}\" is not allowed to be empty", name)));
        }
    }
    if record.tags.is_empty() {
        return Err(invalid("\"tags\" must contain at least 1 items".to_string()));
    }
    Ok(())
}

/// Check every course of a year document, naming the failing entry as
/// `"<year key>"[index]`
pub fn validate_year_courses(years: &YearCourses) -> Result<()> {
    for key in YearKey::ALL {
        for (j, record) in years.get(key).unwrap_or_default().iter().enumerate() {
            validate_embedded_course(record).map_err(|e| match e {
                Error::InvalidInput(msg) => invalid(format!("\"{}\"[{}]: {}", key, j, msg)),
                other => other,
            })?;
        }
    }
    Ok(())
}
