//! Scheduling disciplines.
//!
//! Provides the `Discipline` trait — the seam between the simulation
//! driver and the selection/execution rules — and its two implementations:
//!
//! - **`Srtf`**: Shortest Remaining Time First, preemptive, advances one
//!   time unit per dispatch.
//! - **`Hrrn`**: Highest Response Ratio Next, non-preemptive, runs the
//!   selected process to completion in one dispatch.
//!
//! The `Policy` enum is the public selector consumed by `sim::simulate`
//! and embedded in the result.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

mod hrrn;
mod srtf;

pub use hrrn::{Hrrn, RATIO_EPSILON, response_ratio};
pub use srtf::Srtf;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sim::SimState;

/// A scheduling discipline: the selection rule plus the execution
/// advancement rule.
///
/// `dispatch` is called by the driver only when at least one process is
/// ready at the current clock; it selects one process, executes it for
/// the discipline's quantum (one unit or the whole burst), and updates
/// the timeline and completion bookkeeping through `SimState`.
pub trait Discipline: fmt::Debug {
    /// Discipline name (e.g., "SRTF").
    fn name(&self) -> &'static str;

    /// Runs one dispatch cycle at the current clock.
    fn dispatch(&self, state: &mut SimState);

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selector for the two built-in disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Highest Response Ratio Next (non-preemptive).
    Hrrn,
}

impl Policy {
    /// The discipline implementation behind this selector.
    pub fn as_discipline(&self) -> &'static dyn Discipline {
        match self {
            Policy::Srtf => &Srtf,
            Policy::Hrrn => &Hrrn,
        }
    }

    /// Discipline name.
    pub fn name(&self) -> &'static str {
        self.as_discipline().name()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Srtf.name(), "SRTF");
        assert_eq!(Policy::Hrrn.name(), "HRRN");
        assert_eq!(Policy::Srtf.to_string(), "SRTF");
        assert_eq!(Policy::Hrrn.to_string(), "HRRN");
    }

    #[test]
    fn test_discipline_descriptions() {
        assert_eq!(Srtf.description(), "Shortest Remaining Time First");
        assert_eq!(Hrrn.description(), "Highest Response Ratio Next");
    }
}
