//! Observability events for rosterdesk
//!
//! Every log line carries one of these as its `event` field.
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server listening
    Serving,
    /// Server stopped
    ShutdownComplete,

    // Auth
    /// User signed in
    SignIn,
    /// Credentials rejected
    SignInRejected,
    /// User signed out
    SignOut,

    // Store
    /// Collection fetched
    StoreList,
    /// Record inserted
    StoreInsert,
    /// Record updated
    StoreUpdate,
    /// Store call failed
    StoreFailed,

    // Submission
    /// Submission accepted and sent to the store
    SubmitBegin,
    /// Submission stored and collection refreshed
    SubmitComplete,
    /// Submission blocked by field errors
    SubmitInvalid,
    /// Submission refused while another is in flight
    SubmitBlocked,

    // Overview
    /// Overview statistics computed
    OverviewComputed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "ROSTERDESK_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "ROSTERDESK_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::SignIn => "SIGN_IN",
            Event::SignInRejected => "SIGN_IN_REJECTED",
            Event::SignOut => "SIGN_OUT",

            Event::StoreList => "STORE_LIST",
            Event::StoreInsert => "STORE_INSERT",
            Event::StoreUpdate => "STORE_UPDATE",
            Event::StoreFailed => "STORE_FAILED",

            Event::SubmitBegin => "SUBMIT_BEGIN",
            Event::SubmitComplete => "SUBMIT_COMPLETE",
            Event::SubmitInvalid => "SUBMIT_INVALID",
            Event::SubmitBlocked => "SUBMIT_BLOCKED",

            Event::OverviewComputed => "OVERVIEW_COMPUTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
