use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Task spec should contain valid utf8.")]
    Utf8Error,
    #[error("Invalid record '{1}' on line {0}, expected <name>,<arrival>,<burst>.")]
    InvalidRecord(usize, String),
    #[error("Missing task name on line {0}.")]
    MissingName(usize),
    #[error("Invalid time value '{1}' on line {0}.")]
    InvalidTime(usize, String),
    #[error("Burst time must be greater than 0 on line {0}.")]
    ZeroBurst(usize),
    #[error("Times on line {0} push the simulation past the largest tick.")]
    TimeOverflow(usize),
    #[error("No tasks to schedule.")]
    EmptyInput,
    #[error("Task {0} has not finished.")]
    UnfinishedTask(String),
    #[error(transparent)]
    Scheduler(#[from] scheduler::Error),
}
