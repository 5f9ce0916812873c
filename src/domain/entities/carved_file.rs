//! Carved file entity
//!
//! Records which run of input blocks ended up in which output.

use serde::Serialize;

/// A single output produced by a carve run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarvedFile {
    /// Output name, e.g. `000.jpg`
    name: String,
    /// Index of the block carrying the signature
    first_block: u64,
    /// Number of blocks written, including the first
    block_count: u64,
    /// Total bytes written
    bytes_written: u64,
}

impl CarvedFile {
    /// Starts a record for a file opened at `first_block`
    pub fn new(name: impl Into<String>, first_block: u64) -> Self {
        Self {
            name: name.into(),
            first_block,
            block_count: 0,
            bytes_written: 0,
        }
    }

    pub(crate) fn record_block(&mut self, len: usize) {
        self.block_count += 1;
        self.bytes_written += len as u64;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_block(&self) -> u64 {
        self.first_block
    }

    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
