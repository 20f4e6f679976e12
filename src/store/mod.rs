//! # Student Store
//!
//! The external record store the dashboard reads from and writes to.
//!
//! - `InMemoryStudentStore`: local, for tests and offline demos
//! - `RestStudentStore`: the hosted platform over HTTP
//!
//! Stores do not validate; callers hand them profiles that already passed
//! `StudentValidator`.

mod errors;
mod memory;
mod rest;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStudentStore;
pub use rest::RestStudentStore;

use crate::auth::UserRef;
use crate::roster::SortSpec;
use crate::student::{StudentId, StudentProfile, StudentRecord};

/// Persistence boundary for student rows
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Fetches the whole collection ordered by `sort`
    async fn list(&self, sort: &SortSpec) -> StoreResult<Vec<StudentRecord>>;

    /// Stores a new row stamped with `owner`, returning it with its assigned id
    async fn insert(
        &self,
        profile: &StudentProfile,
        owner: Option<&UserRef>,
    ) -> StoreResult<StudentRecord>;

    /// Replaces every profile field of the row `id`
    async fn update(&self, id: &StudentId, profile: &StudentProfile) -> StoreResult<()>;
}
