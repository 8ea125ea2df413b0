//! Query engine over course records
//!
//! All operations are pure functions over a snapshot of records. They accept
//! anything that can be viewed as a [`CourseRecord`], so the same code serves
//! flattened year documents and flat stored courses.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::CourseRecord;
use crate::{Error, Result};

/// Code prefixes grouped by the program listing
pub const PROGRAM_PREFIXES: [&str; 2] = ["BSIS", "BSIT"];

/// Tags marking a course as published in a program curriculum
pub const PUBLISHED_TAGS: [&str; 2] = ["BSIT", "BSIS"];

/// Tag fragment selecting backend courses
pub const BACKEND_TAG: &str = "backend";

/// Compare two descriptions the way a human-facing listing orders them
///
/// Three levels, each consulted only when the previous one ties:
/// 1. base letters: accents stripped, case folded
/// 2. accents: unaccented before accented
/// 3. case: lowercase before uppercase
///
/// Identical strings compare equal.
pub fn compare_descriptions(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| a.nfd().map(swap_case).cmp(b.nfd().map(swap_case)))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn swap_case(c: char) -> char {
    if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}

/// Sort records by description, ascending
///
/// The sort is stable: records with equal descriptions keep their relative
/// order.
pub fn sort_by_description<T: AsRef<CourseRecord>>(records: &mut [T]) {
    records.sort_by(|a, b| compare_descriptions(&a.as_ref().description, &b.as_ref().description));
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn required(param: Option<&str>, message: &str) -> Result<String> {
    match param {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(Error::InvalidInput(message.to_string())),
    }
}

/// First record whose description contains `name`, ignoring case
///
/// "First" is the first match in the given order.
pub fn search_by_name<T, I>(records: I, name: Option<&str>) -> Result<T>
where
    T: AsRef<CourseRecord>,
    I: IntoIterator<Item = T>,
{
    let name = required(name, "The \"name\" query parameter must be provided.")?;

    records
        .into_iter()
        .find(|r| contains_ignore_case(&r.as_ref().description, &name))
        .ok_or_else(|| {
            Error::NotFound("The provided name does not match any existing courses.".to_string())
        })
}

/// All records whose specialization contains `specialization`, ignoring case
///
/// An empty result is reported as [`Error::NotFound`].
pub fn search_by_specialization<T, I>(records: I, specialization: Option<&str>) -> Result<Vec<T>>
where
    T: AsRef<CourseRecord>,
    I: IntoIterator<Item = T>,
{
    let specialization = required(specialization, "Specialization parameter is required.")?;

    let matches: Vec<T> = records
        .into_iter()
        .filter(|r| contains_ignore_case(&r.as_ref().specialization, &specialization))
        .collect();

    if matches.is_empty() {
        return Err(Error::NotFound(
            "No courses were found matching the given specialization.".to_string(),
        ));
    }
    Ok(matches)
}

/// Records whose code starts with `prefix` (case-sensitive)
pub fn filter_by_code_prefix<T, I>(records: I, prefix: &str) -> Vec<T>
where
    T: AsRef<CourseRecord>,
    I: IntoIterator<Item = T>,
{
    records
        .into_iter()
        .filter(|r| r.as_ref().code.starts_with(prefix))
        .collect()
}

/// Group records under each prefix their code starts with
///
/// Every prefix gets an entry, empty when nothing matches. Records matching
/// no prefix are dropped.
pub fn group_by_code_prefix<T>(records: &[T], prefixes: &[&str]) -> BTreeMap<String, Vec<T>>
where
    T: AsRef<CourseRecord> + Clone,
{
    prefixes
        .iter()
        .map(|prefix| {
            let group = filter_by_code_prefix(records.iter().cloned(), prefix);
            (prefix.to_string(), group)
        })
        .collect()
}

/// Records carrying at least one tag equal to a member of `tags`
pub fn filter_by_tags<T, I>(records: I, tags: &[&str]) -> Vec<T>
where
    T: AsRef<CourseRecord>,
    I: IntoIterator<Item = T>,
{
    records
        .into_iter()
        .filter(|r| r.as_ref().tags.iter().any(|t| tags.contains(&t.as_str())))
        .collect()
}

/// Records carrying at least one tag that contains `fragment` (case-sensitive)
pub fn filter_by_tag_fragment<T, I>(records: I, fragment: &str) -> Vec<T>
where
    T: AsRef<CourseRecord>,
    I: IntoIterator<Item = T>,
{
    records
        .into_iter()
        .filter(|r| r.as_ref().tags.iter().any(|t| t.contains(fragment)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, description: &str, specialization: &str, tags: &[&str]) -> CourseRecord {
        CourseRecord {
            code: code.to_string(),
            description: description.to_string(),
            units: 3.0,
            specialization: specialization.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn descriptions(records: &[CourseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.description.as_str()).collect()
    }

    #[test]
    fn test_compare_descriptions_ignores_case_first() {
        assert_eq!(compare_descriptions("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_descriptions("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_descriptions("a", "A"), Ordering::Less);
        assert_eq!(compare_descriptions("Same", "Same"), Ordering::Equal);
        assert_eq!(compare_descriptions("Data", "Database"), Ordering::Less);
    }

    #[test]
    fn test_accented_descriptions_sort_with_base_letters() {
        let mut records = vec![
            course("Z", "Zoology", "", &["x"]),
            course("A", "Álgebra", "", &["x"]),
            course("E", "Ética", "", &["x"]),
            course("F", "Filipino", "", &["x"]),
        ];
        sort_by_description(&mut records);
        assert_eq!(
            descriptions(&records),
            vec!["Álgebra", "Ética", "Filipino", "Zoology"]
        );

        // Accents only break ties between otherwise equal letters
        assert_eq!(compare_descriptions("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_descriptions("résumé", "resumes"), Ordering::Less);
        assert_eq!(compare_descriptions("école", "Ecole"), Ordering::Greater);
        // Precomposed and decomposed forms are the same text
        assert_eq!(compare_descriptions("Ética", "E\u{301}tica"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_description() {
        let mut records = vec![
            course("CS101", "Intro to Computing", "", &["BSIT"]),
            course("IS201", "Database Systems", "", &["BSIS"]),
            course("CS102", "algorithms", "", &["BSCS"]),
        ];
        sort_by_description(&mut records);
        assert_eq!(
            descriptions(&records),
            vec!["algorithms", "Database Systems", "Intro to Computing"]
        );
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut records = vec![
            course("B", "Ethics", "", &["x"]),
            course("A", "Calculus", "", &["x"]),
            course("C", "Ethics", "", &["x"]),
            course("D", "Calculus", "", &["x"]),
        ];
        sort_by_description(&mut records);
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "D", "B", "C"]);

        let once = records.clone();
        sort_by_description(&mut records);
        assert_eq!(records, once);
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let records = vec![
            course("IS201", "Database Systems", "", &["BSIS"]),
            course("CS201", "Computer Organization", "", &["BSIT"]),
            course("CS301", "Compiler Design", "", &["BSIT"]),
        ];

        let found = search_by_name(&records, Some("comp")).unwrap();
        assert_eq!(found.code, "CS201");

        let found = search_by_name(&records, Some("DATABASE")).unwrap();
        assert_eq!(found.code, "IS201");
    }

    #[test]
    fn test_search_by_name_missing_param_is_invalid() {
        let records = vec![course("IS201", "Database Systems", "", &["BSIS"])];

        assert!(matches!(
            search_by_name(&records, None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            search_by_name(&records, Some("")),
            Err(Error::InvalidInput(_))
        ));
        // Invalid even when there is nothing to search
        assert!(matches!(
            search_by_name(Vec::<CourseRecord>::new(), None),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_search_by_name_no_match() {
        let records = vec![course("IS201", "Database Systems", "", &["BSIS"])];
        assert!(matches!(
            search_by_name(&records, Some("physics")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_search_by_name_treats_pattern_characters_literally() {
        let records = vec![
            course("A", "C++ Programming", "", &["x"]),
            course("B", "Cpp Basics", "", &["x"]),
        ];
        assert_eq!(search_by_name(&records, Some("c++")).unwrap().code, "A");
        assert!(matches!(
            search_by_name(&records, Some(".*")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_search_by_specialization() {
        let records = vec![
            course("A", "Web Dev", "Web Development", &["x"]),
            course("B", "Networks", "Networking", &["x"]),
            course("C", "APIs", "Backend web", &["x"]),
        ];

        let found = search_by_specialization(&records, Some("WEB")).unwrap();
        let codes: Vec<&str> = found.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "C"]);

        assert!(matches!(
            search_by_specialization(&records, Some("security")),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            search_by_specialization(&records, Some("")),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_filter_by_code_prefix_is_anchored_and_case_sensitive() {
        let records = vec![
            course("BSIT-A", "One", "", &["x"]),
            course("X-BSIT", "Two", "", &["x"]),
            course("bsit-c", "Three", "", &["x"]),
        ];
        let found = filter_by_code_prefix(&records, "BSIT");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "BSIT-A");
    }

    #[test]
    fn test_group_by_code_prefix() {
        let records = vec![
            course("BSIT-A", "One", "", &["x"]),
            course("BSIS-B", "Two", "", &["x"]),
            course("CS-C", "Three", "", &["x"]),
        ];
        let groups = group_by_code_prefix(&records, &PROGRAM_PREFIXES);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["BSIT"].len(), 1);
        assert_eq!(groups["BSIT"][0].code, "BSIT-A");
        assert_eq!(groups["BSIS"][0].code, "BSIS-B");

        let empty = group_by_code_prefix::<CourseRecord>(&[], &PROGRAM_PREFIXES);
        assert!(empty["BSIS"].is_empty());
        assert!(empty["BSIT"].is_empty());
    }

    #[test]
    fn test_filter_by_tags() {
        let records = vec![
            course("A", "One", "", &["BSIT"]),
            course("B", "Two", "", &["BSCS", "BSIS"]),
            course("C", "Three", "", &["BSCS"]),
            course("D", "Four", "", &["bsit"]),
        ];
        let found = filter_by_tags(records, &PUBLISHED_TAGS);
        let codes: Vec<&str> = found.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_filter_by_tag_fragment() {
        let records = vec![
            course("A", "One", "", &["frontend"]),
            course("B", "Two", "", &["web", "backend-dev"]),
            course("C", "Three", "", &["Backend"]),
        ];
        let found = filter_by_tag_fragment(&records, BACKEND_TAG);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "B");
    }
}
