//! # Error Module
//!
//! User-facing error taxonomy of the `recover` tool. Every kind terminates
//! the run and maps to exit code 1.

use crate::domain::repositories::{BlockSourceError, SinkError};
use crate::domain::services::CarveError;
use thiserror::Error;

/// Exit code reported for every failed run
pub const EXIT_FAILURE: u8 = 1;

/// Central error type for a recovery run
#[derive(Debug, Error)]
pub enum RecoverError {
    /// Wrong number of arguments or an unknown flag
    #[error("{0}")]
    Usage(String),

    /// Block size not numeric, zero, or out of range
    #[error("{0}")]
    InvalidArgument(String),

    /// Input cannot be opened or read
    #[error("Data not readable: {0}")]
    InputUnreadable(#[source] BlockSourceError),

    /// An output cannot be created, written or flushed
    #[error("Output not writable: {0}")]
    OutputUnwritable(#[source] SinkError),
}

impl RecoverError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

impl From<BlockSourceError> for RecoverError {
    fn from(err: BlockSourceError) -> Self {
        Self::InputUnreadable(err)
    }
}

impl From<SinkError> for RecoverError {
    fn from(err: SinkError) -> Self {
        Self::OutputUnwritable(err)
    }
}

impl From<CarveError> for RecoverError {
    fn from(err: CarveError) -> Self {
        match err {
            CarveError::Source(e) => Self::InputUnreadable(e),
            CarveError::Sink(e) => Self::OutputUnwritable(e),
        }
    }
}

/// Result type alias using RecoverError
pub type Result<T> = std::result::Result<T, RecoverError>;
