//! Record sorting for the listing view
//!
//! Sort is stable: records with equal keys keep their input order in both
//! directions. Each call is a full re-sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{RosterError, RosterResult};
use crate::student::{schema, StudentProfile, StudentRecord};

/// Sortable student column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Gender,
    Address,
    City,
    State,
    ZipCode,
    Major,
    Gpa,
    EnrollmentDate,
    GraduationYear,
}

impl SortField {
    pub const ALL: [SortField; 14] = [
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Phone,
        SortField::DateOfBirth,
        SortField::Gender,
        SortField::Address,
        SortField::City,
        SortField::State,
        SortField::ZipCode,
        SortField::Major,
        SortField::Gpa,
        SortField::EnrollmentDate,
        SortField::GraduationYear,
    ];

    /// Column name, as used by the store and the form
    pub fn column(&self) -> &'static str {
        match self {
            SortField::FirstName => schema::FIRST_NAME,
            SortField::LastName => schema::LAST_NAME,
            SortField::Email => schema::EMAIL,
            SortField::Phone => schema::PHONE,
            SortField::DateOfBirth => schema::DATE_OF_BIRTH,
            SortField::Gender => schema::GENDER,
            SortField::Address => schema::ADDRESS,
            SortField::City => schema::CITY,
            SortField::State => schema::STATE,
            SortField::ZipCode => schema::ZIP_CODE,
            SortField::Major => schema::MAJOR,
            SortField::Gpa => schema::GPA,
            SortField::EnrollmentDate => schema::ENROLLMENT_DATE,
            SortField::GraduationYear => schema::GRADUATION_YEAR,
        }
    }

    /// Compares two profiles by this field's natural order
    fn compare(&self, a: &StudentProfile, b: &StudentProfile) -> Ordering {
        match self {
            SortField::FirstName => a.first_name.cmp(&b.first_name),
            SortField::LastName => a.last_name.cmp(&b.last_name),
            SortField::Email => a.email.cmp(&b.email),
            // None < Some
            SortField::Phone => a.phone.cmp(&b.phone),
            SortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            SortField::Gender => a.gender.as_form_value().cmp(b.gender.as_form_value()),
            SortField::Address => a.address.cmp(&b.address),
            SortField::City => a.city.cmp(&b.city),
            SortField::State => a.state.cmp(&b.state),
            SortField::ZipCode => a.zip_code.cmp(&b.zip_code),
            SortField::Major => a.major.cmp(&b.major),
            SortField::Gpa => a.gpa.total_cmp(&b.gpa),
            SortField::EnrollmentDate => a.enrollment_date.cmp(&b.enrollment_date),
            SortField::GraduationYear => a.graduation_year.cmp(&b.graduation_year),
        }
    }
}

impl FromStr for SortField {
    type Err = RosterError;

    fn from_str(s: &str) -> RosterResult<Self> {
        SortField::ALL
            .into_iter()
            .find(|f| f.column() == s)
            .ok_or_else(|| RosterError::UnknownSortField(s.to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Asc,
    #[serde(rename = "desc", alias = "descending")]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn is_ascending(&self) -> bool {
        *self == SortDirection::Asc
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = RosterError;

    fn from_str(s: &str) -> RosterResult<Self> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(RosterError::UnknownDirection(other.to_string())),
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

impl Default for SortSpec {
    /// The listing opens sorted by last name, ascending
    fn default() -> Self {
        Self::asc(SortField::LastName)
    }
}

/// Sorts student records
pub struct RosterSorter;

impl RosterSorter {
    /// Sorts records in place according to the sort specification.
    pub fn sort(records: &mut [StudentRecord], spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = spec.field.compare(&a.profile, &b.profile);
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Returns a sorted copy
    pub fn sorted(records: &[StudentRecord], spec: &SortSpec) -> Vec<StudentRecord> {
        let mut out = records.to_vec();
        Self::sort(&mut out, spec);
        out
    }
}

/// Header-click sort state of the listing view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    spec: SortSpec,
}

impl SortState {
    pub fn new(spec: SortSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> SortSpec {
        self.spec
    }

    /// Clicking the active column flips its direction; clicking another
    /// column selects it ascending.
    pub fn toggle(&mut self, field: SortField) -> SortSpec {
        self.spec = if self.spec.field == field {
            SortSpec {
                field,
                direction: self.spec.direction.flipped(),
            }
        } else {
            SortSpec::asc(field)
        };
        self.spec
    }
}
