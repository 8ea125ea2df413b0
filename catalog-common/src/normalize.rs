//! Flattening of year documents into a single course list

use crate::model::{CourseRecord, YearCourses, YearKey};

/// Flatten year documents into one course list
///
/// Documents are visited in the given order and, within each document, the
/// year keys in [`YearKey::ALL`] order. Every course present under a key is
/// appended in its stored order. Absent keys contribute nothing; no
/// deduplication is performed.
pub fn flatten<'a, I>(documents: I) -> Vec<CourseRecord>
where
    I: IntoIterator<Item = &'a YearCourses>,
{
    let mut courses = Vec::new();
    for years in documents {
        for key in YearKey::ALL {
            if let Some(records) = years.get(key) {
                courses.extend_from_slice(records);
            }
        }
    }
    courses
}
