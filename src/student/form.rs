//! Raw form values
//!
//! A `StudentForm` is the field-value mapping collected by the UI. Values
//! are strings or numbers exactly as typed; nothing here is validated.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::{self, STUDENT_SCHEMA};
use super::types::{Gender, StudentRecord};

/// Raw field-value mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentForm(Map<String, Value>);

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default draft for a brand-new record.
    ///
    /// GPA 0, graduation year four years out, enrolled today, gender
    /// unspecified, every other field empty.
    pub fn blank(today: NaiveDate) -> Self {
        let mut form = Self::new();
        for name in STUDENT_SCHEMA.field_names() {
            form.set(name, "");
        }
        form.set(schema::GENDER, Gender::Unspecified.as_form_value());
        form.set(schema::GPA, 0);
        form.set(schema::ENROLLMENT_DATE, today.format("%Y-%m-%d").to_string());
        form.set(schema::GRADUATION_YEAR, today.year() + 4);
        form
    }

    /// Seeds the edit form from an existing record
    pub fn from_record(record: &StudentRecord) -> Self {
        let p = &record.profile;
        let mut form = Self::new();
        form.set(schema::FIRST_NAME, p.first_name.as_str());
        form.set(schema::LAST_NAME, p.last_name.as_str());
        form.set(schema::EMAIL, p.email.as_str());
        form.set(schema::PHONE, p.phone.as_deref().unwrap_or(""));
        form.set(
            schema::DATE_OF_BIRTH,
            p.date_of_birth.format("%Y-%m-%d").to_string(),
        );
        form.set(schema::GENDER, p.gender.as_form_value());
        form.set(schema::ADDRESS, p.address.as_str());
        form.set(schema::CITY, p.city.as_str());
        form.set(schema::STATE, p.state.as_str());
        form.set(schema::ZIP_CODE, p.zip_code.as_str());
        form.set(schema::MAJOR, p.major.as_str());
        form.set(schema::GPA, p.gpa);
        form.set(
            schema::ENROLLMENT_DATE,
            p.enrollment_date.format("%Y-%m-%d").to_string(),
        );
        form.set(schema::GRADUATION_YEAR, p.graduation_year);
        form
    }

    /// Sets a field, replacing any previous value
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Builder-style `set`
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for StudentForm {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::types::fixtures;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_blank_defaults() {
        let form = StudentForm::blank(today());

        assert_eq!(form.get("gpa"), Some(&json!(0)));
        assert_eq!(form.get("graduation_year"), Some(&json!(2030)));
        assert_eq!(form.get("enrollment_date"), Some(&json!("2026-10-19")));
        assert_eq!(form.get("gender"), Some(&json!("")));
        for name in ["first_name", "last_name", "email", "phone", "date_of_birth", "address",
            "city", "state", "zip_code", "major"]
        {
            assert_eq!(form.get(name), Some(&json!("")), "{} should be empty", name);
        }
        assert_eq!(form.as_map().len(), 14);
    }

    #[test]
    fn test_from_record_round_trips_values() {
        let mut rec = fixtures::record("r1", "Grace", "Hopper");
        rec.profile.phone = Some("555-0100".to_string());
        rec.profile.gender = Gender::Female;
        let form = StudentForm::from_record(&rec);

        assert_eq!(form.get("last_name"), Some(&json!("Hopper")));
        assert_eq!(form.get("phone"), Some(&json!("555-0100")));
        assert_eq!(form.get("gender"), Some(&json!("female")));
        assert_eq!(form.get("gpa"), Some(&json!(3.2)));
        assert_eq!(form.get("graduation_year"), Some(&json!(2026)));
        assert!(form.get("id").is_none());
    }

    #[test]
    fn test_deserializes_from_object() {
        let form: StudentForm = serde_json::from_value(json!({"gpa": "3.5", "major": "CS"})).unwrap();
        assert_eq!(form.get("gpa"), Some(&json!("3.5")));
    }
}
