use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to read {}: {}", .0.display(), .1)]
    Read(PathBuf, io::Error),
    #[error("Unable to write {}: {}", .0.display(), .1)]
    Write(PathBuf, io::Error),
    #[error(transparent)]
    Processor(#[from] processor::Error),
}
