//! Process descriptor model.

use serde::{Deserialize, Serialize};

/// An immutable description of one job to schedule.
///
/// # Time Representation
/// Times are in abstract simulation units relative to t=0. Negative arrival
/// times are accepted and participate in comparisons as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Caller-supplied identifier, used as the tie-break key during
    /// selection. Uniqueness is assumed but not enforced.
    pub id: u32,
    /// Instant the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time the process requires before completion.
    pub burst: i64,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(id: u32, arrival: i64, burst: i64) -> Self {
        Self { id, arrival, burst }
    }

    /// Whether this process can ever execute.
    ///
    /// Processes with a non-positive burst are excluded from the working
    /// set before any scheduling decision is made.
    pub fn is_schedulable(&self) -> bool {
        self.burst > 0
    }
}
