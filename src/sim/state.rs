//! Per-run working state.
//!
//! A run operates on `WorkItem`s — working copies pairing each immutable
//! `Process` descriptor with its mutable runtime state — so the caller's
//! input list is never touched. Completion, the running totals, and the
//! previous-execution record all live here, shared by both disciplines.

use crate::models::{Process, Timeline};

/// Lifecycle state of a process during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    /// Arrived or not; eligible to be selected once the clock reaches its
    /// arrival time.
    Waiting,
    /// Currently holding the CPU within a dispatch cycle.
    Running,
    /// Finished; never selected again.
    Completed,
}

/// One process plus its mutable runtime state.
#[derive(Debug, Clone)]
pub struct WorkItem {
    /// The immutable descriptor.
    pub process: Process,
    /// CPU time still required. Monotonically non-increasing; 0 once
    /// finished.
    pub remaining: i64,
    /// Lifecycle state.
    pub state: ProcState,
    /// Instant the last unit of execution ended, set exactly once.
    pub completion: Option<i64>,
}

impl WorkItem {
    /// Creates the working copy for one descriptor.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining: process.burst,
            state: ProcState::Waiting,
            completion: None,
        }
    }

    /// Whether this item can be selected at `clock`.
    pub fn is_ready(&self, clock: i64) -> bool {
        self.state != ProcState::Completed && self.process.arrival <= clock
    }

    /// Whether this item has never executed.
    pub fn never_ran(&self) -> bool {
        self.remaining == self.process.burst
    }
}

/// The previous execution record: which process ran last and how much
/// work it had left afterwards. Drives start/resume/interrupt
/// classification in preemptive disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrevExec {
    /// Process that executed most recently.
    pub process_id: u32,
    /// Its remaining time after that execution.
    pub remaining: i64,
}

/// All mutable state for one simulation run.
#[derive(Debug)]
pub struct SimState {
    /// Current simulation time.
    pub clock: i64,
    /// Working copies of the schedulable processes.
    pub items: Vec<WorkItem>,
    /// Segments and event log recorded so far.
    pub timeline: Timeline,
    /// Previous execution record, `None` before the first dispatch.
    pub prev: Option<PrevExec>,
    /// Time units spent executing (excludes idle gaps).
    pub busy: i64,
    /// Sum of waiting times of completed processes.
    pub total_waiting: i64,
    /// Sum of turnaround times of completed processes.
    pub total_turnaround: i64,
    /// Number of completed processes.
    pub completed: usize,
}

impl SimState {
    /// Creates the initial state over the given working set, clock at 0.
    pub fn new(items: Vec<WorkItem>) -> Self {
        Self {
            clock: 0,
            items,
            timeline: Timeline::new(),
            prev: None,
            busy: 0,
            total_waiting: 0,
            total_turnaround: 0,
            completed: 0,
        }
    }

    /// Whether every process has completed.
    pub fn all_completed(&self) -> bool {
        self.completed == self.items.len()
    }

    /// Whether any process is ready at the current clock.
    pub fn any_ready(&self) -> bool {
        self.items.iter().any(|item| item.is_ready(self.clock))
    }

    /// Earliest arrival among non-completed processes.
    pub fn next_arrival(&self) -> Option<i64> {
        self.items
            .iter()
            .filter(|item| item.state != ProcState::Completed)
            .map(|item| item.process.arrival)
            .min()
    }

    /// Jumps the clock forward to the next pending arrival.
    ///
    /// Called only when no process is ready, so every pending arrival is
    /// in the future; the clock never moves backwards. The skipped
    /// interval is idle time: no segment, no log entry.
    pub fn skip_idle(&mut self) {
        if let Some(arrival) = self.next_arrival() {
            self.clock = self.clock.max(arrival);
        }
    }

    /// Marks the item at `idx` completed at the current clock and folds
    /// its turnaround and waiting time into the running totals.
    pub fn complete(&mut self, idx: usize) {
        let clock = self.clock;
        let item = &mut self.items[idx];
        item.state = ProcState::Completed;
        item.completion = Some(clock);

        let turnaround = clock - item.process.arrival;
        let waiting = turnaround - item.process.burst;
        self.total_turnaround += turnaround;
        self.total_waiting += waiting;
        self.completed += 1;
    }
}
