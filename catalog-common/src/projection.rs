//! Reduction of course records to their published view

use crate::model::{CourseRecord, ProjectedCourse};

impl From<&CourseRecord> for ProjectedCourse {
    fn from(record: &CourseRecord) -> Self {
        ProjectedCourse {
            description: record.description.clone(),
            tags: record.tags.clone(),
        }
    }
}

/// Project each record to its description and tags, keeping order
pub fn project<T, I>(records: I) -> Vec<ProjectedCourse>
where
    T: AsRef<CourseRecord>,
    I: IntoIterator<Item = T>,
{
    records
        .into_iter()
        .map(|r| ProjectedCourse::from(r.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;

    #[test]
    fn test_project_keeps_only_description_and_tags() {
        let course = Course {
            id: "42".to_string(),
            record: CourseRecord {
                code: "IS201".to_string(),
                description: "Database Systems".to_string(),
                units: 3.0,
                specialization: "Data".to_string(),
                tags: vec!["BSIS".to_string(), "core".to_string()],
            },
        };

        let projected = project([&course]);
        assert_eq!(
            projected,
            vec![ProjectedCourse {
                description: "Database Systems".to_string(),
                tags: vec!["BSIS".to_string(), "core".to_string()],
            }]
        );

        let value = serde_json::to_value(&projected[0]).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_project_preserves_order() {
        let records: Vec<CourseRecord> = ["B", "A", "C"]
            .iter()
            .map(|d| CourseRecord {
                code: d.to_string(),
                description: d.to_string(),
                units: 1.0,
                specialization: String::new(),
                tags: vec!["t".to_string()],
            })
            .collect();

        let projected = project(&records);
        let descriptions: Vec<&str> = projected.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(descriptions, vec!["B", "A", "C"]);
    }
}
