//! # HTTP Server Module
//!
//! JSON API behind the dashboard UI.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/auth/*` - Sign-in, sign-out, current user
//! - `/api/*` - Overview, listing, add/edit

mod auth_routes;
mod errors;
pub mod server;
mod student_routes;

pub use auth_routes::{SignInRequest, UserResponse};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use student_routes::{ListParams, ListResponse, SubmitResponse};
