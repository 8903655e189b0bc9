use std::fmt::{self, Display};

use crate::{Error, TaskQueue};

/// Simulation time, measured in ticks.
pub type Ticks = u64;

/// A task (process) that has to be scheduled.
///
/// The record is created once from the input and then updated in place
/// by the scheduler that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The name of the task. Names are not required to be unique.
    pub name: String,

    /// The tick at which the task becomes ready.
    pub arrival_time: Ticks,

    /// The total amount of CPU time the task needs.
    pub burst_time: Ticks,

    /// The CPU time that the task still needs.
    ///
    /// Only preemptive schedulers consume this value, it stays equal to
    /// [`Task::burst_time`] otherwise.
    pub remaining_burst_time: Ticks,

    /// The start of the most recent run segment.
    ///
    /// This is overwritten every time a preempted task resumes, the full
    /// history is only available in the [`Schedule::timeline`].
    pub start_time: Option<Ticks>,

    /// The tick at which the task has finished.
    pub finish_time: Option<Ticks>,

    /// The time the task has spent ready but not running.
    pub waiting_time: Option<Ticks>,
}

impl Task {
    pub fn new(name: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Task {
        Task {
            name: name.into(),
            arrival_time,
            burst_time,
            remaining_burst_time: burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: None,
        }
    }

    /// Marks the task as finished at `finish_time` and computes its waiting time.
    pub fn complete(&mut self, finish_time: Ticks) {
        debug_assert!(
            finish_time >= self.arrival_time + self.burst_time,
            "Task {} finished at {finish_time} before it could have been served",
            self.name
        );
        self.finish_time = Some(finish_time);
        self.waiting_time = Some(finish_time - self.arrival_time - self.burst_time);
    }
}

/// A contiguous interval during which one task occupied the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    pub fn new(name: impl Into<String>, start: Ticks, end: Ticks) -> Segment {
        Segment {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.start, self.end)
    }
}

/// The result of running a [`Scheduler`] to completion.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    /// Run segments in the order in which they were closed.
    pub timeline: Vec<Segment>,

    /// Finished tasks in completion order.
    pub completed: TaskQueue,
}

impl Schedule {
    pub fn new(timeline: Vec<Segment>, completed: TaskQueue) -> Schedule {
        Schedule {
            timeline,
            completed,
        }
    }

    /// Returns the run segments of the tasks named `name`.
    pub fn segments_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Segment> + 'a {
        self.timeline
            .iter()
            .filter(move |segment| segment.name == name)
    }

    /// The tick at which the last task finished.
    pub fn makespan(&self) -> Ticks {
        self.timeline
            .iter()
            .map(|segment| segment.end)
            .max()
            .unwrap_or(0)
    }
}

/// The trait that every scheduling discipline implements.
pub trait Scheduler: Send {
    /// The label of the discipline, used as the report header.
    fn name(&self) -> &'static str;

    /// Runs all the tasks in `source` to completion.
    ///
    /// The source queue holds the tasks that have not arrived yet, in
    /// input order.
    fn run(&mut self, source: TaskQueue) -> Result<Schedule, Error>;
}
