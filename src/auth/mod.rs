//! # Auth Module
//!
//! Authentication against the hosted data platform. The dashboard reads the
//! current user to gate its views and to stamp ownership on new records.

pub mod errors;
mod memory;
mod provider;
mod rest;
pub mod session;

pub use errors::{AuthError, AuthResult};
pub use memory::InMemoryAuthProvider;
pub use provider::AuthProvider;
pub use rest::RestAuthProvider;
pub use session::{Session, SessionCell, UserRef};
