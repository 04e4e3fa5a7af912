//! Injected per-outcome reporting.
//!
//! The runner never owns ambient reporting state; the process entry point
//! hands it a sink and keeps the lifecycle. `None` disables per-case
//! reporting entirely.

use super::Outcome;
use std::sync::Arc;

/// One resolved test case.
#[derive(Debug, Clone)]
pub struct OutcomeEvent {
    pub strength: i32,
    /// Position of the case within its batch (request order).
    pub index: usize,
    pub outcome: Outcome,
    /// True when the decode call itself failed (transport/status), as
    /// opposed to a semantic mismatch.
    pub call_failed: bool,
}

pub type OutcomeSink = Arc<dyn Fn(OutcomeEvent) + Send + Sync>;
