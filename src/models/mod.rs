//! Simulation domain models.
//!
//! Provides the core data types for describing scheduling inputs and
//! results: the immutable process descriptor, the execution timeline
//! (segments plus structured event log), and the final run result.
//!
//! Mutable per-run state (remaining time, completion bookkeeping) lives in
//! `sim::state`, not here — model types never change during a run, so the
//! caller's input can be reused across runs and policies.

mod process;
mod result;
mod timeline;

pub use process::Process;
pub use result::ScheduleResult;
pub use timeline::{EventTag, ExecutionSegment, LogEntry, Timeline};
