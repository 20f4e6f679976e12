//! Student form validator
//!
//! Validation semantics:
//! - Every field in the schema is checked independently
//! - All violations are reported together, in schema order
//! - Output is either a complete `StudentProfile` or a non-empty error list,
//!   never both
//! - Pure function of its input

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use super::errors::{FieldError, FieldErrorKind, ValidationErrors, ValidationResult};
use super::form::StudentForm;
use super::schema::{
    self, Date, Decimal, Email, Field, GenderChoice, OptionalText, Text, Year, ZipCode,
    STUDENT_SCHEMA,
};
use super::types::{Gender, StudentProfile};

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$";
const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
const ZIP_PATTERN: &str = r"^[0-9]{5}(-[0-9]{4})?$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_PATTERN).expect("date pattern compiles"))
}

fn zip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ZIP_PATTERN).expect("zip pattern compiles"))
}

/// Validates raw student forms against `STUDENT_SCHEMA`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StudentValidator;

impl StudentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a form, producing a normalized profile.
    ///
    /// # Errors
    ///
    /// Returns every field violation when any field fails.
    pub fn validate(&self, form: &StudentForm) -> ValidationResult<StudentProfile> {
        let s = &STUDENT_SCHEMA;

        match (
            read(&s.first_name, form),
            read(&s.last_name, form),
            read(&s.email, form),
            read(&s.phone, form),
            read(&s.date_of_birth, form),
            read(&s.gender, form),
            read(&s.address, form),
            read(&s.city, form),
            read(&s.state, form),
            read(&s.zip_code, form),
            read(&s.major, form),
            read(&s.gpa, form),
            read(&s.enrollment_date, form),
            read(&s.graduation_year, form),
        ) {
            (
                Ok(first_name),
                Ok(last_name),
                Ok(email),
                Ok(phone),
                Ok(date_of_birth),
                Ok(gender),
                Ok(address),
                Ok(city),
                Ok(state),
                Ok(zip_code),
                Ok(major),
                Ok(gpa),
                Ok(enrollment_date),
                Ok(graduation_year),
            ) => Ok(StudentProfile {
                first_name,
                last_name,
                email,
                phone,
                date_of_birth,
                gender,
                address,
                city,
                state,
                zip_code,
                major,
                gpa,
                enrollment_date,
                graduation_year,
            }),
            (
                first_name,
                last_name,
                email,
                phone,
                date_of_birth,
                gender,
                address,
                city,
                state,
                zip_code,
                major,
                gpa,
                enrollment_date,
                graduation_year,
            ) => Err(ValidationErrors::from_failures([
                first_name.err(),
                last_name.err(),
                email.err(),
                phone.err(),
                date_of_birth.err(),
                gender.err(),
                address.err(),
                city.err(),
                state.err(),
                zip_code.err(),
                major.err(),
                gpa.err(),
                enrollment_date.err(),
                graduation_year.err(),
            ])),
        }
    }

    /// Validates a single field. Used for inline feedback while typing.
    pub fn validate_field(&self, field: &str, value: Option<&Value>) -> Option<FieldError> {
        let s = &STUDENT_SCHEMA;
        match field {
            schema::FIRST_NAME => check(&s.first_name, value).err(),
            schema::LAST_NAME => check(&s.last_name, value).err(),
            schema::EMAIL => check(&s.email, value).err(),
            schema::PHONE => check(&s.phone, value).err(),
            schema::DATE_OF_BIRTH => check(&s.date_of_birth, value).err(),
            schema::GENDER => check(&s.gender, value).err(),
            schema::ADDRESS => check(&s.address, value).err(),
            schema::CITY => check(&s.city, value).err(),
            schema::STATE => check(&s.state, value).err(),
            schema::ZIP_CODE => check(&s.zip_code, value).err(),
            schema::MAJOR => check(&s.major, value).err(),
            schema::GPA => check(&s.gpa, value).err(),
            schema::ENROLLMENT_DATE => check(&s.enrollment_date, value).err(),
            schema::GRADUATION_YEAR => check(&s.graduation_year, value).err(),
            _ => None,
        }
    }
}

/// A rule failure, before it is attached to a field
struct Violation {
    kind: FieldErrorKind,
    /// Overrides the field's message
    message: Option<&'static str>,
}

impl From<FieldErrorKind> for Violation {
    fn from(kind: FieldErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }
}

/// A field rule and the type it normalizes to
trait Rule {
    type Output;

    fn check(&self, value: Option<&Value>) -> Result<Self::Output, Violation>;
}

fn read<R: Rule>(field: &Field<R>, form: &StudentForm) -> Result<R::Output, FieldError> {
    check(field, form.get(field.name))
}

fn check<R: Rule>(field: &Field<R>, value: Option<&Value>) -> Result<R::Output, FieldError> {
    field.rule.check(value).map_err(|violation| {
        FieldError::new(
            field.name,
            violation.kind,
            violation.message.unwrap_or(field.message),
        )
    })
}

impl Rule for Text {
    type Output = String;

    fn check(&self, value: Option<&Value>) -> Result<String, Violation> {
        let text = text_value(value)?;
        if text.chars().count() < self.min_len {
            return Err(FieldErrorKind::TooShort.into());
        }
        Ok(text)
    }
}

impl Rule for OptionalText {
    type Output = Option<String>;

    fn check(&self, value: Option<&Value>) -> Result<Option<String>, Violation> {
        let text = text_value(value)?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

impl Rule for Email {
    type Output = String;

    fn check(&self, value: Option<&Value>) -> Result<String, Violation> {
        let text = text_value(value)?;
        if !email_regex().is_match(&text) {
            return Err(FieldErrorKind::InvalidFormat.into());
        }
        Ok(text)
    }
}

impl Rule for Date {
    type Output = NaiveDate;

    fn check(&self, value: Option<&Value>) -> Result<NaiveDate, Violation> {
        let text = text_value(value)?;
        if !date_regex().is_match(&text) {
            return Err(FieldErrorKind::InvalidFormat.into());
        }
        NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| Violation {
            kind: FieldErrorKind::InvalidFormat,
            message: Some("Invalid calendar date"),
        })
    }
}

impl Rule for GenderChoice {
    type Output = Gender;

    fn check(&self, value: Option<&Value>) -> Result<Gender, Violation> {
        let text = text_value(value)?;
        Gender::parse(&text).ok_or_else(|| FieldErrorKind::InvalidFormat.into())
    }
}

impl Rule for ZipCode {
    type Output = String;

    fn check(&self, value: Option<&Value>) -> Result<String, Violation> {
        let text = text_value(value)?;
        if !zip_regex().is_match(&text) {
            return Err(FieldErrorKind::InvalidFormat.into());
        }
        Ok(text)
    }
}

impl Rule for Decimal {
    type Output = f64;

    fn check(&self, value: Option<&Value>) -> Result<f64, Violation> {
        let number = decimal_value(value).ok_or(Violation {
            kind: FieldErrorKind::InvalidType,
            message: Some("Expected a number"),
        })?;
        if number < self.min || number > self.max {
            return Err(FieldErrorKind::OutOfRange.into());
        }
        Ok(number)
    }
}

impl Rule for Year {
    type Output = i32;

    fn check(&self, value: Option<&Value>) -> Result<i32, Violation> {
        let number = integer_value(value).ok_or(Violation {
            kind: FieldErrorKind::InvalidType,
            message: Some("Expected a whole number"),
        })?;
        let year = i32::try_from(number).map_err(|_| Violation::from(FieldErrorKind::OutOfRange))?;
        if year < self.min || year > self.max {
            return Err(FieldErrorKind::OutOfRange.into());
        }
        Ok(year)
    }
}

/// Trimmed text. Missing and null read as empty; other JSON types are rejected.
fn text_value(value: Option<&Value>) -> Result<String, Violation> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(_) => Err(Violation {
            kind: FieldErrorKind::InvalidType,
            message: Some("Expected text"),
        }),
    }
}

/// Finite number, from a JSON number or a numeric string
fn decimal_value(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Whole number, from an integer, an integral float, or an integer string
fn integer_value(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
