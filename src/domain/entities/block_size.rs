//! Block size entity
//!
//! The fixed allocation unit of the scanned medium. Every block read from
//! the input and written to an output has exactly this many bytes.

use std::fmt;
use std::num::NonZeroUsize;

/// A validated, non-zero block length in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    /// Block size of a FAT-formatted memory card
    pub const FAT_SECTOR: BlockSize = BlockSize(NonZeroUsize::new(512).unwrap());

    /// Creates a block size, returning `None` for zero
    pub fn new(bytes: usize) -> Option<Self> {
        NonZeroUsize::new(bytes).map(Self)
    }

    /// Returns the block length in bytes
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of whole blocks contained in `len` bytes
    pub fn whole_blocks(self, len: u64) -> u64 {
        len / self.get() as u64
    }

    /// Bytes left over after the last whole block
    pub fn trailing_bytes(self, len: u64) -> u64 {
        len % self.get() as u64
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}
