//! Substring search over student records
//!
//! A record matches when the string form of any of its fields contains
//! the query, ignoring case. The empty query matches everything.

use crate::student::StudentRecord;

/// Evaluates search queries against records
pub struct SearchFilter;

impl SearchFilter {
    /// Checks if a record matches the query
    pub fn matches(record: &StudentRecord, query: &str) -> bool {
        let needle = query.to_lowercase();
        Self::matches_lowercase(record, &needle)
    }

    /// Retains matching records, preserving order
    pub fn filter(records: &[StudentRecord], query: &str) -> Vec<StudentRecord> {
        let needle = query.to_lowercase();
        records
            .iter()
            .filter(|r| Self::matches_lowercase(r, &needle))
            .cloned()
            .collect()
    }

    fn matches_lowercase(record: &StudentRecord, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        record
            .search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::fixtures::record;

    #[test]
    fn test_empty_query_matches_all() {
        let records = vec![record("1", "Ann", "Smith"), record("2", "Bob", "Adams")];
        assert_eq!(SearchFilter::filter(&records, "").len(), 2);
    }

    #[test]
    fn test_case_insensitive_major() {
        let mut rec = record("1", "Ann", "Smith");
        rec.profile.major = "CS".to_string();
        rec.profile.email = "ann@example.edu".to_string();

        assert!(SearchFilter::matches(&rec, "cs"));
        assert!(SearchFilter::matches(&rec, "Cs"));
    }

    #[test]
    fn test_matches_email_substring() {
        let mut rec = record("1", "Ann", "Smith");
        rec.profile.major = "Art".to_string();
        rec.profile.email = "ann@cs.example.edu".to_string();

        assert!(SearchFilter::matches(&rec, "cs"));
    }

    #[test]
    fn test_matches_numeric_and_date_fields() {
        let mut rec = record("1", "Ann", "Smith");
        rec.profile.gpa = 3.75;

        assert!(SearchFilter::matches(&rec, "3.75"));
        assert!(SearchFilter::matches(&rec, "2026"));
        assert!(SearchFilter::matches(&rec, "2003-05"));
    }

    #[test]
    fn test_no_match() {
        let records = vec![record("1", "Ann", "Smith"), record("2", "Bob", "Adams")];
        let hits = SearchFilter::filter(&records, "adams");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "2");
        assert!(SearchFilter::filter(&records, "zzz").is_empty());
    }
}
