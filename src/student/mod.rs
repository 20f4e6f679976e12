//! Student records: data model, form schema, and validation
//!
//! # Lifecycle
//!
//! 1. The UI seeds a `StudentForm` (blank draft or an existing record)
//! 2. `StudentValidator` turns the form into a `StudentProfile` or field errors
//! 3. The profile is inserted or updated through the record store
//! 4. The store returns `StudentRecord`s carrying their assigned ids

mod errors;
mod form;
pub mod schema;
mod types;
mod validator;

pub use errors::{FieldError, FieldErrorKind, ValidationErrors, ValidationResult};
pub use form::StudentForm;
pub use schema::{Field, StudentSchema, STUDENT_SCHEMA};
pub use types::{Gender, StudentId, StudentProfile, StudentRecord};
pub use validator::StudentValidator;

#[cfg(test)]
pub(crate) use types::fixtures;
