use std::collections::VecDeque;

use log::trace;

use crate::{Error, Task, Ticks};

/// An ordered queue of tasks.
///
/// The same structure backs the source queue (tasks that have not arrived
/// yet), the ready queue and the queue of completed tasks. Removing a task
/// moves it out of the queue.
///
/// Cloning a queue produces an independent copy of every task, in the
/// same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> TaskQueue {
        TaskQueue {
            tasks: VecDeque::new(),
        }
    }

    /// Appends a task at the tail of the queue.
    pub fn enqueue(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// Removes the task at the head of the queue.
    pub fn dequeue_front(&mut self) -> Result<Task, Error> {
        self.tasks.pop_front().ok_or(Error::EmptyQueue)
    }

    /// Removes the task with the smallest burst time.
    ///
    /// On ties the task closest to the head of the queue wins.
    pub fn remove_min_by_burst(&mut self) -> Result<Task, Error> {
        self.remove_min_by(|task| task.burst_time)
    }

    /// Removes the task with the smallest remaining burst time.
    ///
    /// On ties the task closest to the head of the queue wins.
    pub fn remove_min_by_remaining(&mut self) -> Result<Task, Error> {
        self.remove_min_by(|task| task.remaining_burst_time)
    }

    fn remove_min_by<F>(&mut self, key: F) -> Result<Task, Error>
    where
        F: Fn(&Task) -> Ticks,
    {
        let mut min_index = None;
        let mut min_value = Ticks::MAX;
        for (index, task) in self.tasks.iter().enumerate() {
            let value = key(task);
            // strict comparison, the first of several equal minimums wins
            if min_index.is_none() || value < min_value {
                min_index = Some(index);
                min_value = value;
            }
        }

        min_index
            .and_then(|index| self.tasks.remove(index))
            .ok_or(Error::EmptyQueue)
    }

    /// Moves every task that has arrived by `now` into `ready`.
    ///
    /// Tasks are moved in queue order. Returns the number of moved tasks.
    pub fn admit_arrived(&mut self, now: Ticks, ready: &mut TaskQueue) -> usize {
        let (arrived, pending): (VecDeque<Task>, VecDeque<Task>) = self
            .tasks
            .drain(..)
            .partition(|task| task.arrival_time <= now);
        self.tasks = pending;

        let count = arrived.len();
        for task in arrived {
            trace!("t={now} {} arrived", task.name);
            ready.enqueue(task);
        }
        count
    }

    /// The earliest arrival time in the queue.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.tasks.iter().map(|task| task.arrival_time).min()
    }

    /// Fails on the first task that needs no CPU time.
    pub fn check_bursts(&self) -> Result<(), Error> {
        match self.tasks.iter().find(|task| task.burst_time == 0) {
            Some(task) => Err(Error::ZeroBurst(task.name.clone())),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

impl FromIterator<Task> for TaskQueue {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskQueue {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TaskQueue {
    type Item = Task;
    type IntoIter = std::collections::vec_deque::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(tasks: &[(&str, Ticks, Ticks)]) -> TaskQueue {
        tasks
            .iter()
            .map(|&(name, arrival, burst)| Task::new(name, arrival, burst))
            .collect()
    }

    fn names(queue: &TaskQueue) -> Vec<&str> {
        queue.iter().map(|task| task.name.as_str()).collect()
    }

    #[test]
    fn dequeue_front_is_fifo() {
        let mut queue = queue(&[("A", 0, 3), ("B", 0, 1)]);
        assert_eq!(queue.dequeue_front().unwrap().name, "A");
        assert_eq!(queue.dequeue_front().unwrap().name, "B");
        assert_eq!(queue.dequeue_front(), Err(Error::EmptyQueue));
    }

    #[test]
    fn remove_min_by_burst_prefers_earlier_on_ties() {
        let mut queue = queue(&[("A", 0, 5), ("B", 0, 2), ("C", 0, 2), ("D", 0, 9)]);
        assert_eq!(queue.remove_min_by_burst().unwrap().name, "B");
        assert_eq!(names(&queue), ["A", "C", "D"]);
        assert_eq!(queue.remove_min_by_burst().unwrap().name, "C");
        assert_eq!(queue.remove_min_by_burst().unwrap().name, "A");
    }

    #[test]
    fn remove_min_by_remaining_ignores_burst() {
        let mut queue = queue(&[("A", 0, 2), ("B", 0, 8)]);
        for task in queue.tasks.iter_mut() {
            if task.name == "B" {
                task.remaining_burst_time = 1;
            }
        }
        assert_eq!(queue.remove_min_by_remaining().unwrap().name, "B");
        assert_eq!(names(&queue), ["A"]);
    }

    #[test]
    fn removing_the_tail_keeps_the_queue_usable() {
        let mut queue = queue(&[("A", 0, 5), ("B", 0, 1)]);
        assert_eq!(queue.remove_min_by_burst().unwrap().name, "B");
        queue.enqueue(Task::new("C", 0, 4));
        assert_eq!(names(&queue), ["A", "C"]);
    }

    #[test]
    fn remove_min_on_empty_queue_fails() {
        let mut queue = TaskQueue::new();
        assert_eq!(queue.remove_min_by_burst(), Err(Error::EmptyQueue));
        assert_eq!(queue.remove_min_by_remaining(), Err(Error::EmptyQueue));
    }

    #[test]
    fn clone_is_independent() {
        let original = queue(&[("A", 0, 5), ("B", 1, 1)]);
        let mut copy = original.clone();
        copy.dequeue_front().unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(names(&original), ["A", "B"]);
        assert_eq!(names(&copy), ["B"]);
    }

    #[test]
    fn check_bursts_names_the_first_zero_burst() {
        assert_eq!(queue(&[("A", 0, 1), ("B", 2, 3)]).check_bursts(), Ok(()));
        assert_eq!(
            queue(&[("A", 0, 1), ("B", 2, 0), ("C", 0, 0)]).check_bursts(),
            Err(Error::ZeroBurst("B".to_string()))
        );
    }

    #[test]
    fn admit_arrived_moves_every_arrived_task_in_order() {
        let mut source = queue(&[("A", 4, 1), ("B", 0, 1), ("C", 2, 1), ("D", 2, 1)]);
        let mut ready = TaskQueue::new();

        assert_eq!(source.admit_arrived(2, &mut ready), 3);
        assert_eq!(names(&ready), ["B", "C", "D"]);
        assert_eq!(names(&source), ["A"]);
        assert_eq!(source.next_arrival(), Some(4));

        assert_eq!(source.admit_arrived(3, &mut ready), 0);
        assert_eq!(source.admit_arrived(4, &mut ready), 1);
        assert_eq!(source.next_arrival(), None);
    }
}
