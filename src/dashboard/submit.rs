//! Submission gate
//!
//! At most one submission is in flight per dashboard:
//!
//! ```text
//! Idle --try_begin--> Submitting --guard dropped--> Idle
//! ```
//!
//! The guard releases the gate on every exit path, success or failure.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[derive(Debug, Default)]
pub struct SubmitGate {
    busy: AtomicBool,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Submitting`, or returns `None` if a submission is already running
    pub fn try_begin(&self) -> Option<SubmitGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard { gate: self })
    }

    pub fn state(&self) -> SubmitState {
        if self.busy.load(Ordering::Acquire) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }
}

/// Holds the gate in `Submitting` until dropped
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    gate: &'a SubmitGate,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}
