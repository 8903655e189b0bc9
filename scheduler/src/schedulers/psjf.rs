use std::mem;

use log::{debug, trace};

use crate::{Error, Schedule, Scheduler, Segment, Task, TaskQueue, Ticks};

/// The task that currently occupies the CPU.
#[derive(Debug)]
struct Running {
    task: Task,
    /// Start of the current run segment.
    since: Ticks,
}

impl Running {
    fn start(mut task: Task, now: Ticks) -> Running {
        task.start_time = Some(now);
        Running { task, since: now }
    }

    fn segment(&self, end: Ticks) -> Segment {
        Segment::new(&self.task.name, self.since, end)
    }
}

/// Preemptive Shortest-Job-First (Shortest-Remaining-Time-First).
///
/// Time advances one tick at a time. Before every tick the running task
/// is compared against the ready task with the least remaining burst time
/// and is preempted if that task needs strictly less time.
#[derive(Debug, Default)]
pub struct Psjf {
    ready_queue: TaskQueue,
    completed: TaskQueue,
    timeline: Vec<Segment>,
    current: Option<Running>,
    now: Ticks,
}

impl Psjf {
    pub fn new() -> Self {
        Psjf::default()
    }

    /// Returns the task to run for the next tick, preempting `running` if
    /// a ready task needs less time.
    fn check_preemption(&mut self, running: Running) -> Result<Running, Error> {
        if self.ready_queue.is_empty() {
            return Ok(running);
        }

        let candidate = self.ready_queue.remove_min_by_remaining()?;
        if candidate.remaining_burst_time < running.task.remaining_burst_time {
            debug!(
                "t={} {} (remaining {}) preempts {} (remaining {})",
                self.now,
                candidate.name,
                candidate.remaining_burst_time,
                running.task.name,
                running.task.remaining_burst_time
            );
            self.timeline.push(running.segment(self.now));
            self.ready_queue.enqueue(running.task);
            Ok(Running::start(candidate, self.now))
        } else {
            self.ready_queue.enqueue(candidate);
            Ok(running)
        }
    }

    /// Runs `running` for one tick.
    fn tick(&mut self, mut running: Running) {
        debug_assert!(running.task.remaining_burst_time > 0);
        self.now += 1;
        running.task.remaining_burst_time -= 1;

        if running.task.remaining_burst_time > 0 {
            self.current = Some(running);
            return;
        }

        running.task.complete(self.now);
        debug!(
            "t={} {} finished (waited {:?})",
            self.now, running.task.name, running.task.waiting_time
        );
        self.timeline.push(running.segment(self.now));
        self.completed.enqueue(running.task);
    }
}

impl Scheduler for Psjf {
    fn name(&self) -> &'static str {
        "PSJF"
    }

    fn run(&mut self, mut source: TaskQueue) -> Result<Schedule, Error> {
        *self = Psjf::new();
        source.check_bursts()?;
        let total = source.len();

        while self.completed.len() < total {
            source.admit_arrived(self.now, &mut self.ready_queue);

            let running = match self.current.take() {
                Some(running) => running,
                None if self.ready_queue.is_empty() => {
                    let next = source.next_arrival().ok_or(Error::EmptyQueue)?;
                    trace!("t={} idle until {next}", self.now);
                    self.now = next;
                    continue;
                }
                None => {
                    let task = self.ready_queue.remove_min_by_remaining()?;
                    debug!("t={} dispatching {}", self.now, task.name);
                    Running::start(task, self.now)
                }
            };

            let running = self.check_preemption(running)?;
            self.tick(running);
        }

        Ok(Schedule::new(
            mem::take(&mut self.timeline),
            mem::take(&mut self.completed),
        ))
    }
}
