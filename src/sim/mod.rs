//! Simulation driver, working state, and metrics.
//!
//! The driver owns the time cursor and the main loop shared by both
//! disciplines: ready-set checks, idle-skip, and the final metric
//! computation. Per-run mutable state (remaining times, completion
//! bookkeeping, the previous-execution record) lives in `SimState`, built
//! from a working copy of the caller's input so the input survives the
//! run unchanged.

mod driver;
mod metrics;
mod state;

pub use driver::simulate;
pub use metrics::Metrics;
pub use state::{PrevExec, ProcState, SimState, WorkItem};
