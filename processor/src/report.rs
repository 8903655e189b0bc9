use std::fmt::{self, Display};

use scheduler::{TaskQueue, Ticks};

use crate::error::Error;

/// The waiting time of a single finished task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingTime {
    pub name: String,
    pub arrival_time: Ticks,
    pub waiting_time: Ticks,
}

/// Waiting times of a set of finished tasks, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingTimeReport {
    entries: Vec<WaitingTime>,
}

impl WaitingTimeReport {
    /// Builds the report from the tasks completed by a scheduler.
    ///
    /// Tasks are listed by arrival time; tasks that arrived at the same
    /// tick keep their completion order.
    pub fn from_completed(completed: &TaskQueue) -> Result<WaitingTimeReport, Error> {
        if completed.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut entries = completed
            .iter()
            .map(|task| {
                let waiting_time = task
                    .waiting_time
                    .ok_or_else(|| Error::UnfinishedTask(task.name.clone()))?;
                Ok(WaitingTime {
                    name: task.name.clone(),
                    arrival_time: task.arrival_time,
                    waiting_time,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        entries.sort_by_key(|entry| entry.arrival_time);

        Ok(WaitingTimeReport { entries })
    }

    pub fn entries(&self) -> &[WaitingTime] {
        &self.entries
    }

    /// The sum of all waiting times. Widened so that no task set of valid
    /// ticks can overflow it.
    pub fn total(&self) -> u128 {
        self.entries
            .iter()
            .map(|entry| u128::from(entry.waiting_time))
            .sum()
    }

    /// The average waiting time in hundredths of a tick, rounded half away
    /// from zero.
    pub fn average_hundredths(&self) -> u128 {
        let count = self.entries.len() as u128;
        (200 * self.total() + count) / (2 * count)
    }
}

impl Display for WaitingTimeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Waiting Time {}: {}", entry.name, entry.waiting_time)?;
        }
        let average = self.average_hundredths();
        write!(f, "Average Waiting Time: {}.{:02}", average / 100, average % 100)
    }
}
