//! Roster views over the in-memory record collection
//!
//! Everything here is a pure, synchronous transformation:
//!
//! - `Overview`: count, average GPA, top major, graduating this year
//! - `SearchFilter`: case-insensitive substring match across all fields
//! - `RosterSorter`: stable single-field sort
//! - `RosterQuery`: filter, then sort

mod errors;
mod filters;
mod overview;
mod query;
mod sorter;

pub use errors::{RosterError, RosterResult};
pub use filters::SearchFilter;
pub use overview::Overview;
pub use query::RosterQuery;
pub use sorter::{RosterSorter, SortDirection, SortField, SortSpec, SortState};
