//! Observability for rosterdesk
//!
//! - Structured logging (JSON) through `tracing`
//! - Typed event names on every log line
//!
//! # Usage
//!
//! ```ignore
//! use rosterdesk::observability::{init_logging, Event};
//!
//! init_logging("info");
//! tracing::info!(event = %Event::StoreList, count = 42, "students fetched");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{env_filter, init_logging};
