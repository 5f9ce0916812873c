//! Block source trait
//!
//! Defines the interface for reading a raw dump as a sequence of
//! fixed-size blocks. Sources never hand out a partial block.

use std::io;
use thiserror::Error;

/// Errors that can occur when reading blocks from the input
#[derive(Error, Debug)]
pub enum BlockSourceError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Input not found: {0}")]
    NotFound(String),

    #[error("Not a regular file, cannot be memory-mapped: {0}")]
    NotRegularFile(String),

    #[error("Read error at offset {offset}: {source}")]
    ReadError {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl BlockSourceError {
    /// Classifies an error raised while opening `path`
    pub fn from_open(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_string()),
            io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            _ => Self::IoError(err),
        }
    }
}

/// Trait for sequential, block-aligned input
///
/// Implementations can wrap a disk image file, a memory map, or any
/// `std::io::Read`.
///
/// # Example
///
/// ```ignore
/// let mut source = ReaderBlockSource::open("card.raw")?;
/// let mut block = vec![0u8; 512];
/// while source.read_block(&mut block)? {
///     // block holds exactly 512 bytes
/// }
/// ```
pub trait BlockSource {
    /// Fills `block` completely with the next block of input
    ///
    /// # Returns
    ///
    /// `true` if a whole block was read, `false` once fewer than
    /// `block.len()` bytes remain. A trailing fragment is never returned.
    fn read_block(&mut self, block: &mut [u8]) -> Result<bool, BlockSourceError>;

    /// Bytes consumed as whole blocks so far
    fn position(&self) -> u64;
}

impl<S: BlockSource + ?Sized> BlockSource for Box<S> {
    fn read_block(&mut self, block: &mut [u8]) -> Result<bool, BlockSourceError> {
        (**self).read_block(block)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }
}
