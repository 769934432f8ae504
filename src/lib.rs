//! Deterministic CPU scheduling simulator.
//!
//! Simulates two classical uniprocessor scheduling disciplines — Shortest
//! Remaining Time First (preemptive) and Highest Response Ratio Next
//! (non-preemptive) — over a finite set of processes described by arrival
//! time and CPU burst length, producing an execution timeline, a structured
//! event log, and aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionSegment`, `LogEntry`,
//!   `EventTag`, `Timeline`, `ScheduleResult`
//! - **`policy`**: The `Discipline` trait and its `Srtf` / `Hrrn`
//!   implementations, plus the `Policy` selector
//! - **`sim`**: The simulation driver, per-run working state, and the
//!   metrics calculator
//!
//! # Example
//!
//! ```
//! use cpu_sched::{simulate, Policy, Process};
//!
//! let processes = vec![
//!     Process::new(1, 0, 4),
//!     Process::new(2, 1, 2),
//! ];
//!
//! let result = simulate(&processes, Policy::Hrrn);
//! assert_eq!(result.total_time, 6);
//! assert!((result.avg_waiting - 1.5).abs() < 1e-9);
//! ```
//!
//! # Determinism
//!
//! A run is a pure function of its input: no randomness, no wall clock.
//! Re-running the same policy on the same processes yields an identical
//! `ScheduleResult`, down to every segment and log entry.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod models;
pub mod policy;
pub mod sim;

pub use models::{EventTag, ExecutionSegment, LogEntry, Process, ScheduleResult, Timeline};
pub use policy::{Discipline, Hrrn, Policy, Srtf};
pub use sim::simulate;
