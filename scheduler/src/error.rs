use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Queue is empty, no task can be removed.")]
    EmptyQueue,
    #[error("Task {0} has a zero burst time and can never run.")]
    ZeroBurst(String),
}
