//! Declarative field schema for student forms
//!
//! One typed entry per form field. Each entry's rule fixes the Rust type the
//! field normalizes to, so the validator builds a `StudentProfile` straight
//! from the per-field results. `StudentSchema::fields` gives display order;
//! error order follows it.

/// Required text with a minimum trimmed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub min_len: usize,
}

/// Free text that may be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalText;

/// `local@domain.tld`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Email;

/// `YYYY-MM-DD`, real calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date;

/// One of the gender choices, `""` allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderChoice;

/// Five digits, optional `-` and four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipCode;

/// Number in `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal {
    pub min: f64,
    pub max: f64,
}

/// Whole year in `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    pub min: i32,
    pub max: i32,
}

/// Schema entry for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<R> {
    pub name: &'static str,
    pub rule: R,
    /// Message reported when the rule fails
    pub message: &'static str,
}

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const GENDER: &str = "gender";
pub const ADDRESS: &str = "address";
pub const CITY: &str = "city";
pub const STATE: &str = "state";
pub const ZIP_CODE: &str = "zip_code";
pub const MAJOR: &str = "major";
pub const GPA: &str = "gpa";
pub const ENROLLMENT_DATE: &str = "enrollment_date";
pub const GRADUATION_YEAR: &str = "graduation_year";

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;
pub const GRADUATION_YEAR_MIN: i32 = 2000;
pub const GRADUATION_YEAR_MAX: i32 = 2100;

/// Number of fields on the student form
pub const FIELD_COUNT: usize = 14;

/// The student form schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentSchema {
    pub first_name: Field<Text>,
    pub last_name: Field<Text>,
    pub email: Field<Email>,
    pub phone: Field<OptionalText>,
    pub date_of_birth: Field<Date>,
    pub gender: Field<GenderChoice>,
    pub address: Field<Text>,
    pub city: Field<Text>,
    pub state: Field<Text>,
    pub zip_code: Field<ZipCode>,
    pub major: Field<Text>,
    pub gpa: Field<Decimal>,
    pub enrollment_date: Field<Date>,
    pub graduation_year: Field<Year>,
}

pub const STUDENT_SCHEMA: StudentSchema = StudentSchema {
    first_name: Field {
        name: FIRST_NAME,
        rule: Text { min_len: 2 },
        message: "First name is required",
    },
    last_name: Field {
        name: LAST_NAME,
        rule: Text { min_len: 2 },
        message: "Last name is required",
    },
    email: Field {
        name: EMAIL,
        rule: Email,
        message: "Invalid email address",
    },
    phone: Field {
        name: PHONE,
        rule: OptionalText,
        message: "Invalid phone number",
    },
    date_of_birth: Field {
        name: DATE_OF_BIRTH,
        rule: Date,
        message: "Invalid date format",
    },
    gender: Field {
        name: GENDER,
        rule: GenderChoice,
        message: "Invalid gender",
    },
    address: Field {
        name: ADDRESS,
        rule: Text { min_len: 5 },
        message: "Address is required",
    },
    city: Field {
        name: CITY,
        rule: Text { min_len: 2 },
        message: "City is required",
    },
    state: Field {
        name: STATE,
        rule: Text { min_len: 2 },
        message: "State is required",
    },
    zip_code: Field {
        name: ZIP_CODE,
        rule: ZipCode,
        message: "Invalid ZIP code",
    },
    major: Field {
        name: MAJOR,
        rule: Text { min_len: 2 },
        message: "Major is required",
    },
    gpa: Field {
        name: GPA,
        rule: Decimal {
            min: GPA_MIN,
            max: GPA_MAX,
        },
        message: "GPA must be between 0 and 4",
    },
    enrollment_date: Field {
        name: ENROLLMENT_DATE,
        rule: Date,
        message: "Invalid date format",
    },
    graduation_year: Field {
        name: GRADUATION_YEAR,
        rule: Year {
            min: GRADUATION_YEAR_MIN,
            max: GRADUATION_YEAR_MAX,
        },
        message: "Graduation year must be between 2000 and 2100",
    },
};

impl StudentSchema {
    /// Field names in display order
    pub fn field_names(&self) -> [&'static str; FIELD_COUNT] {
        [
            self.first_name.name,
            self.last_name.name,
            self.email.name,
            self.phone.name,
            self.date_of_birth.name,
            self.gender.name,
            self.address.name,
            self.city.name,
            self.state.name,
            self.zip_code.name,
            self.major.name,
            self.gpa.name,
            self.enrollment_date.name,
            self.graduation_year.name,
        ]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field_names().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_names_unique() {
        let names: HashSet<_> = STUDENT_SCHEMA.field_names().into_iter().collect();
        assert_eq!(names.len(), FIELD_COUNT);
    }

    #[test]
    fn test_display_order() {
        let names = STUDENT_SCHEMA.field_names();
        assert_eq!(names[0], FIRST_NAME);
        assert_eq!(names[9], ZIP_CODE);
        assert_eq!(names[13], GRADUATION_YEAR);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(STUDENT_SCHEMA.address.rule, Text { min_len: 5 });
        assert!(STUDENT_SCHEMA.contains(ADDRESS));
        assert!(!STUDENT_SCHEMA.contains("id"));
    }
}
