//! A CPU scheduling simulation library.
//!
//! This library provides the task model, the task queue and the
//! Shortest-Job-First scheduling disciplines, both non-preemptive and
//! preemptive.
//!

mod error;
mod queue;
mod scheduler;
mod schedulers;

pub use crate::error::Error;
pub use crate::queue::TaskQueue;
pub use crate::scheduler::{Schedule, Scheduler, Segment, Task, Ticks};
pub use crate::schedulers::{Nsjf, Psjf};

/// Returns a structure that implements the `Scheduler` trait with a
/// non-preemptive Shortest-Job-First policy.
///
/// Once a task is selected it runs until it finishes. Among the ready
/// tasks, the one with the smallest burst time is selected; on ties the
/// one that became ready first wins.
pub fn nsjf() -> impl Scheduler {
    Nsjf::new()
}

/// Returns a structure that implements the `Scheduler` trait with a
/// preemptive Shortest-Job-First (Shortest-Remaining-Time-First) policy.
///
/// The running task is preempted whenever a ready task needs strictly
/// less time to finish than what the running task has left.
pub fn psjf() -> impl Scheduler {
    Psjf::new()
}
