//! Student record types
//!
//! `StudentProfile` is the validated, typed draft. `StudentRecord` is a
//! profile the store has persisted and assigned an id to.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned record identifier. Opaque and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Gender choice. The unselected form value `""` maps to `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
    #[default]
    #[serde(rename = "", alias = "unspecified")]
    Unspecified,
}

impl Gender {
    /// Parses a form value. Only the exact lowercase choices are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "" | "unspecified" => Some(Gender::Unspecified),
            _ => None,
        }
    }

    /// The value written to the form and to the store
    pub fn as_form_value(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unspecified => "",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

/// A fully validated student draft (no id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Gender,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub major: String,
    pub gpa: f64,
    pub enrollment_date: NaiveDate,
    pub graduation_year: i32,
}

impl StudentProfile {
    /// String representation of every profile field, in schema order.
    ///
    /// An absent phone contributes nothing.
    pub fn search_values(&self) -> Vec<String> {
        let mut values = vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
        ];
        if let Some(phone) = &self.phone {
            values.push(phone.clone());
        }
        values.extend([
            self.date_of_birth.format("%Y-%m-%d").to_string(),
            self.gender.as_form_value().to_string(),
            self.address.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip_code.clone(),
            self.major.clone(),
            self.gpa.to_string(),
            self.enrollment_date.format("%Y-%m-%d").to_string(),
            self.graduation_year.to_string(),
        ]);
        values
    }
}

/// A persisted student row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    /// Owner reference stamped on insert
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub profile: StudentProfile,
}

impl StudentRecord {
    pub fn new(id: StudentId, user_id: Option<String>, profile: StudentProfile) -> Self {
        Self {
            id,
            user_id,
            profile,
        }
    }

    /// String representation of every field including id and owner
    pub fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.id.to_string()];
        if let Some(owner) = &self.user_id {
            values.push(owner.clone());
        }
        values.extend(self.profile.search_values());
        values
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse(""), Some(Gender::Unspecified));
        assert_eq!(Gender::parse("unspecified"), Some(Gender::Unspecified));
        assert_eq!(Gender::parse("Male"), None);
        assert_eq!(Gender::parse("robot"), None);
    }

    #[test]
    fn test_gender_wire_values() {
        assert_eq!(serde_json::to_value(Gender::Unspecified).unwrap(), json!(""));
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), json!("female"));
        let parsed: Gender = serde_json::from_value(json!("unspecified")).unwrap();
        assert_eq!(parsed, Gender::Unspecified);
    }

    #[test]
    fn test_record_serializes_flat() {
        let rec = record("abc", "Ada", "Lovelace");
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["last_name"], "Lovelace");
        assert_eq!(json["date_of_birth"], "2003-05-17");
        assert!(json.get("profile").is_none());

        let back: StudentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_search_values_cover_id_and_numbers() {
        let mut rec = record("id-77", "Ada", "Lovelace");
        rec.profile.gpa = 3.0;
        let values = rec.search_values();

        assert!(values.contains(&"id-77".to_string()));
        assert!(values.contains(&"3".to_string()));
        assert!(values.contains(&"2026".to_string()));
        assert!(values.contains(&"2022-09-01".to_string()));
    }
}
