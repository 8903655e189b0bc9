//! A processor simulation library
//!
//! This is used for running the schedulers from the [`scheduler`] crate
//! over a task set and for producing their reports.

use std::fmt::{self, Display};

use log::info;
use scheduler::{Scheduler, Segment, TaskQueue};

mod error;
mod parser;
mod report;

pub use crate::error::Error;
pub use crate::parser::read_tasks;
pub use crate::report::{WaitingTime, WaitingTimeReport};

/// The outcome of running one scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    /// The name of the scheduling discipline.
    pub discipline: &'static str,

    /// The run segments, in the order in which they ended.
    pub timeline: Vec<Segment>,

    /// The waiting time of every task.
    pub report: WaitingTimeReport,
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.discipline)?;
        for segment in &self.timeline {
            writeln!(f, "{}", segment)?;
        }
        write!(f, "{}", self.report)
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Run a scheduler over a task set.
    ///
    /// * `scheduler` - the scheduler to use for the simulation.
    /// * `tasks` - the tasks, in input order. The scheduler takes ownership
    ///             of them.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{read_tasks, Processor};
    ///
    /// let tasks = read_tasks(b"A,0,8\nB,1,4").unwrap();
    /// let log = Processor::run(scheduler::psjf(), tasks).unwrap();
    ///
    /// assert_eq!(log.timeline.len(), 3);
    /// println!("{}", log);
    /// ```
    pub fn run<S: Scheduler>(mut scheduler: S, tasks: TaskQueue) -> Result<Log, Error> {
        if tasks.is_empty() {
            return Err(Error::EmptyInput);
        }

        let count = tasks.len();
        let schedule = scheduler.run(tasks)?;
        let report = WaitingTimeReport::from_completed(&schedule.completed)?;
        info!(
            "{} finished {count} tasks at t={} in {} segments",
            scheduler.name(),
            schedule.makespan(),
            schedule.timeline.len()
        );

        Ok(Log {
            discipline: scheduler.name(),
            timeline: schedule.timeline,
            report,
        })
    }
}

/// Run every scheduling discipline over the same task set.
///
/// The non-preemptive scheduler runs on a copy of the tasks, the
/// preemptive one on the originals.
pub fn simulate(tasks: TaskQueue) -> Result<Vec<Log>, Error> {
    let copy = tasks.clone();
    Ok(vec![
        Processor::run(scheduler::nsjf(), copy)?,
        Processor::run(scheduler::psjf(), tasks)?,
    ])
}

/// Format the [`Processor`]'s logs to a [`String`].
///
/// * `logs` - the logs returned by the [`Processor`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, read_tasks, simulate};
///
/// let logs = simulate(read_tasks(b"AAA,0,5").unwrap()).unwrap();
///
/// assert_eq!(
///     format_logs(&logs),
///     "NSJF:\nAAA\t0\t5\nWaiting Time AAA: 0\nAverage Waiting Time: 0.00\n\n\
///      PSJF:\nAAA\t0\t5\nWaiting Time AAA: 0\nAverage Waiting Time: 0.00"
/// );
/// ```
pub fn format_logs(logs: &[Log]) -> String {
    logs.iter()
        .map(|log| log.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
