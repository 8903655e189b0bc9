use std::mem;

use log::{debug, trace};

use crate::{Error, Schedule, Scheduler, Segment, TaskQueue, Ticks};

/// Non-preemptive Shortest-Job-First.
///
/// Whenever the CPU becomes free, the ready task with the smallest burst
/// time is selected and runs until it finishes.
#[derive(Debug, Default)]
pub struct Nsjf {
    ready_queue: TaskQueue,
    completed: TaskQueue,
    timeline: Vec<Segment>,
    now: Ticks,
}

impl Nsjf {
    pub fn new() -> Self {
        Nsjf::default()
    }

    fn dispatch(&mut self) -> Result<(), Error> {
        let mut task = self.ready_queue.remove_min_by_burst()?;
        let start = self.now;
        task.start_time = Some(start);
        self.now += task.burst_time;
        task.complete(self.now);

        debug!(
            "t={start} running {} until {} (waited {:?})",
            task.name, self.now, task.waiting_time
        );
        self.timeline.push(Segment::new(&task.name, start, self.now));
        self.completed.enqueue(task);
        Ok(())
    }
}

impl Scheduler for Nsjf {
    fn name(&self) -> &'static str {
        "NSJF"
    }

    fn run(&mut self, mut source: TaskQueue) -> Result<Schedule, Error> {
        *self = Nsjf::new();
        source.check_bursts()?;
        let total = source.len();

        while self.completed.len() < total {
            source.admit_arrived(self.now, &mut self.ready_queue);

            if self.ready_queue.is_empty() {
                let next = source.next_arrival().ok_or(Error::EmptyQueue)?;
                trace!("t={} idle until {next}", self.now);
                self.now = next;
                continue;
            }

            self.dispatch()?;
        }

        Ok(Schedule::new(
            mem::take(&mut self.timeline),
            mem::take(&mut self.completed),
        ))
    }
}
