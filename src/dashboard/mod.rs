//! # Dashboard
//!
//! View logic behind the three screens: the overview, the student listing,
//! and the add/edit form. Every action requires a signed-in user; failures
//! surface as a `DashboardError` that also renders as a user-facing
//! `Notice`.

mod clock;
mod errors;
mod notice;
mod service;
mod submit;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{DashboardError, DashboardResult};
pub use notice::{Notice, NoticeLevel};
pub use service::{Dashboard, SubmitOutcome};
pub use submit::{SubmitGate, SubmitGuard, SubmitState};
