//! Course catalog data model
//!
//! Two storage shapes coexist:
//! - flat course documents ([`Course`]), one per stored course
//! - year documents ([`YearDocument`]), each embedding up to four per-year
//!   course lists

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A single course as stored or embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub description: String,
    #[serde(serialize_with = "serialize_units")]
    pub units: f64,
    /// Absent on courses embedded in year documents
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub specialization: String,
    pub tags: Vec<String>,
}

/// Whole unit counts are written as integers (`3`, not `3.0`)
fn serialize_units<S: Serializer>(units: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if units.fract() == 0.0 && units.abs() < 1e15 {
        serializer.serialize_i64(*units as i64)
    } else {
        serializer.serialize_f64(*units)
    }
}

impl AsRef<CourseRecord> for CourseRecord {
    fn as_ref(&self) -> &CourseRecord {
        self
    }
}

/// A flat course document with its store identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(flatten)]
    pub record: CourseRecord,
}

impl AsRef<CourseRecord> for Course {
    fn as_ref(&self) -> &CourseRecord {
        &self.record
    }
}

/// Fixed year keys of a [`YearDocument`], in curriculum order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKey {
    First,
    Second,
    Third,
    Fourth,
}

impl YearKey {
    /// All keys in the order they are visited when flattening
    pub const ALL: [YearKey; 4] = [
        YearKey::First,
        YearKey::Second,
        YearKey::Third,
        YearKey::Fourth,
    ];

    /// Document key as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            YearKey::First => "1st Year",
            YearKey::Second => "2nd Year",
            YearKey::Third => "3rd Year",
            YearKey::Fourth => "4th Year",
        }
    }
}

impl std::fmt::Display for YearKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-year course lists of a year document
///
/// Each key is optional: `None` means the key is absent from the document,
/// which is distinct from a present but empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearCourses {
    #[serde(rename = "1st Year", default, skip_serializing_if = "Option::is_none")]
    pub first_year: Option<Vec<CourseRecord>>,
    #[serde(rename = "2nd Year", default, skip_serializing_if = "Option::is_none")]
    pub second_year: Option<Vec<CourseRecord>>,
    #[serde(rename = "3rd Year", default, skip_serializing_if = "Option::is_none")]
    pub third_year: Option<Vec<CourseRecord>>,
    #[serde(rename = "4th Year", default, skip_serializing_if = "Option::is_none")]
    pub fourth_year: Option<Vec<CourseRecord>>,
}

impl YearCourses {
    /// Courses stored under `key`, if the key is present
    pub fn get(&self, key: YearKey) -> Option<&[CourseRecord]> {
        match key {
            YearKey::First => self.first_year.as_deref(),
            YearKey::Second => self.second_year.as_deref(),
            YearKey::Third => self.third_year.as_deref(),
            YearKey::Fourth => self.fourth_year.as_deref(),
        }
    }

    /// Replace the list stored under `key`
    pub fn set(&mut self, key: YearKey, courses: Vec<CourseRecord>) {
        let slot = match key {
            YearKey::First => &mut self.first_year,
            YearKey::Second => &mut self.second_year,
            YearKey::Third => &mut self.third_year,
            YearKey::Fourth => &mut self.fourth_year,
        };
        *slot = Some(courses);
    }
}

/// A stored year document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearDocument {
    pub id: String,
    #[serde(flatten)]
    pub years: YearCourses,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reduced read-only view of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedCourse {
    pub description: String,
    pub tags: Vec<String>,
}
