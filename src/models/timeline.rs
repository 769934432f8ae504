//! Execution timeline: segments and the structured event log.
//!
//! A `Timeline` grows as the simulation executes. Segments record who held
//! the CPU and for how long; log entries record the scheduling events
//! (start, resume, interrupt, end) at each dispatch instant.
//!
//! # Coalescing
//!
//! Adjacent same-process unit steps extend the last segment in place, so a
//! stretch of uninterrupted execution is always one segment. Segments are
//! never split or removed once recorded, and idle intervals produce no
//! segment at all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One uninterrupted stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process holding the CPU.
    pub process_id: u32,
    /// Instant the stretch begins.
    pub start: i64,
    /// Length of the stretch. Always positive.
    pub duration: i64,
}

impl ExecutionSegment {
    /// Creates a new segment.
    pub fn new(process_id: u32, start: i64, duration: i64) -> Self {
        Self {
            process_id,
            start,
            duration,
        }
    }

    /// Exclusive end instant (`start + duration`).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}

/// Classification of a dispatch instant.
///
/// Several tags may apply to the same instant — a one-unit burst run in
/// isolation is both `Start` and `End`, and a process may `Start` by
/// interrupting another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTag {
    /// The process executes its first unit.
    Start,
    /// The process continues after having been preempted earlier.
    Resume,
    /// The process takes the CPU from another process that still has
    /// remaining work.
    Interrupt {
        /// Id of the preempted process.
        preempted: u32,
    },
    /// The process executes its last unit and completes.
    End,
}

/// A structured record of one scheduling event.
///
/// A continuing process (same process as the previous unit) produces an
/// entry with no tags. For a non-preemptive whole-burst dispatch, `burst`
/// carries the dispatched length and the tags are `Start` and `End`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Instant of the dispatch.
    pub time: i64,
    /// Process being dispatched.
    pub process_id: u32,
    /// Whole-burst length for atomic dispatch, `None` for unit steps.
    pub burst: Option<i64>,
    /// Event classifications for this instant, in fixed order:
    /// start, interrupt, resume, end.
    pub tags: Vec<EventTag>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={} -> P{}", self.time, self.process_id)?;
        if let Some(burst) = self.burst {
            write!(f, " (burst={burst})")?;
        }
        for tag in &self.tags {
            match tag {
                EventTag::Start => write!(f, " (start)")?,
                EventTag::Resume => write!(f, " (resuming)")?,
                EventTag::Interrupt { preempted } => {
                    write!(f, " (after P{preempted} interrupted)")?
                }
                EventTag::End => write!(f, " (end)")?,
            }
        }
        Ok(())
    }
}

/// Ordered execution segments plus the structured event log for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments ordered by non-decreasing start time.
    pub segments: Vec<ExecutionSegment>,
    /// Log entries ordered by dispatch instant.
    pub log: Vec<LogEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one unit of execution at `time`.
    ///
    /// Extends the last segment in place when it belongs to the same
    /// process and abuts `time`; otherwise opens a new one-unit segment.
    /// An idle gap breaks coalescing even for the same process.
    pub fn record_unit(&mut self, process_id: u32, time: i64) {
        match self.segments.last_mut() {
            Some(seg) if seg.process_id == process_id && seg.end() == time => {
                seg.duration += 1;
            }
            _ => self
                .segments
                .push(ExecutionSegment::new(process_id, time, 1)),
        }
    }

    /// Records one whole-burst stretch `[time, time + burst)`.
    pub fn record_burst(&mut self, process_id: u32, time: i64, burst: i64) {
        self.segments
            .push(ExecutionSegment::new(process_id, time, burst));
    }

    /// Appends a log entry.
    pub fn push_entry(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    /// Total CPU time covered by segments.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration).sum()
    }
}
