//! Overview, search, and sort through the public API

use chrono::NaiveDate;
use rosterdesk::roster::{
    Overview, RosterQuery, RosterSorter, SearchFilter, SortDirection, SortField, SortSpec,
    SortState,
};
use rosterdesk::student::{Gender, StudentId, StudentProfile, StudentRecord};

fn student(id: &str, last: &str, major: &str, gpa: f64, year: i32) -> StudentRecord {
    StudentRecord::new(
        StudentId::new(id),
        Some("owner-1".to_string()),
        StudentProfile {
            first_name: "Pat".to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.edu", last.to_lowercase()),
            phone: None,
            date_of_birth: NaiveDate::from_ymd_opt(2003, 1, 1).unwrap(),
            gender: Gender::Other,
            address: "9 Elm Street".to_string(),
            city: "Dayton".to_string(),
            state: "OH".to_string(),
            zip_code: "45402".to_string(),
            major: major.to_string(),
            gpa,
            enrollment_date: NaiveDate::from_ymd_opt(2021, 9, 1).unwrap(),
            graduation_year: year,
        },
    )
}

fn last_names(records: &[StudentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.profile.last_name.as_str()).collect()
}

#[test]
fn test_empty_overview() {
    let overview = Overview::compute(&[], 2026);
    assert_eq!(overview, Overview::default());
    assert_eq!(
        serde_json::to_value(&overview).unwrap(),
        serde_json::json!({"totalCount": 0, "averageGpa": 0.0, "topMajor": "", "graduatingThisYear": 0})
    );
}

#[test]
fn test_overview_statistics() {
    let records = vec![
        student("1", "Smith", "CS", 3.0, 2026),
        student("2", "Adams", "CS", 3.5, 2027),
        student("3", "Jones", "Art", 4.0, 2026),
    ];

    let overview = Overview::compute(&records, 2026);

    assert_eq!(overview.total_count, 3);
    assert_eq!(overview.top_major, "CS");
    assert_eq!(overview.average_gpa, 3.5);
    assert_eq!(overview.average_gpa_display(), "3.50");
    assert_eq!(overview.graduating_this_year, 2);
}

#[test]
fn test_sort_last_name_both_directions() {
    let records = vec![
        student("1", "Smith", "CS", 3.0, 2026),
        student("2", "Adams", "CS", 3.0, 2026),
        student("3", "Jones", "CS", 3.0, 2026),
    ];

    let asc = RosterSorter::sorted(&records, &SortSpec::asc(SortField::LastName));
    assert_eq!(last_names(&asc), vec!["Adams", "Jones", "Smith"]);

    let desc = RosterSorter::sorted(&records, &SortSpec::desc(SortField::LastName));
    assert_eq!(last_names(&desc), vec!["Smith", "Jones", "Adams"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let records = vec![
        student("first", "Lee", "CS", 3.0, 2026),
        student("other", "Kim", "CS", 3.0, 2026),
        student("second", "Lee", "Art", 2.0, 2026),
    ];

    let sorted = RosterSorter::sorted(&records, &SortSpec::asc(SortField::LastName));
    let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["other", "first", "second"]);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let by_major = student("1", "Smith", "CS", 3.0, 2026);
    let mut by_email = student("2", "Adams", "History", 3.0, 2026);
    by_email.profile.email = "docs.team@example.edu".to_string();
    let neither = student("3", "Jones", "Art", 3.0, 2026);

    assert!(SearchFilter::matches(&by_major, "cs"));
    assert!(SearchFilter::matches(&by_email, "cs"));
    assert!(!SearchFilter::matches(&neither, "cs"));
    assert_eq!(SearchFilter::filter(&[by_major, by_email, neither], "").len(), 3);
}

#[test]
fn test_query_filters_then_sorts() {
    let records = vec![
        student("1", "Smith", "CS", 3.9, 2026),
        student("2", "Adams", "Art", 3.1, 2026),
        student("3", "Jones", "CS", 2.4, 2026),
    ];

    let query = RosterQuery::parse(Some("CS"), Some("gpa"), Some("asc")).unwrap();
    assert_eq!(last_names(&query.apply(&records)), vec!["Jones", "Smith"]);
    assert!(RosterQuery::parse(None, Some("nickname"), None).is_err());
}

#[test]
fn test_header_click_toggle() {
    let mut state = SortState::default();
    assert_eq!(state.spec(), SortSpec::asc(SortField::LastName));

    assert_eq!(state.toggle(SortField::LastName).direction, SortDirection::Desc);
    assert_eq!(state.toggle(SortField::Gpa), SortSpec::asc(SortField::Gpa));
    assert_eq!(state.toggle(SortField::Gpa), SortSpec::desc(SortField::Gpa));
}
