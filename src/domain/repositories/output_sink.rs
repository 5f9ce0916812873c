//! Output sink traits
//!
//! A sink factory creates (or overwrites) a named output; the sink accepts
//! whole blocks and is closed exactly once by consuming it.

use std::io;
use thiserror::Error;

/// Errors that can occur when creating or writing an output
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Disk full while writing {0}")]
    DiskFull(String),

    #[error("Failed to write {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl SinkError {
    /// Classifies an I/O error raised for the output `name`
    pub fn from_io(name: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(name.to_string()),
            io::ErrorKind::NotFound => Self::DirectoryNotFound(name.to_string()),
            io::ErrorKind::StorageFull => Self::DiskFull(name.to_string()),
            _ => Self::Write {
                name: name.to_string(),
                source: err,
            },
        }
    }
}

/// A single writable output
pub trait OutputSink {
    /// Appends one whole block
    fn write_block(&mut self, block: &[u8]) -> Result<(), SinkError>;

    /// Flushes and releases the output
    fn close(self) -> Result<(), SinkError>;
}

/// Trait for creating named outputs
///
/// # Example
///
/// ```ignore
/// let mut factory = LocalSinkFactory::new("./recovered")?;
/// let mut sink = factory.create("000.jpg")?;
/// sink.write_block(&block)?;
/// sink.close()?;
/// ```
pub trait SinkFactory {
    type Sink: OutputSink;

    /// Creates the output `name`, truncating any existing content
    fn create(&mut self, name: &str) -> Result<Self::Sink, SinkError>;
}
