//! Memory-mapped block source
//!
//! Maps the whole input and copies whole blocks out of the mapping. The
//! tail past the last whole block is never touched.

use crate::domain::repositories::{BlockSource, BlockSourceError};
use memmap2::Mmap;
use std::fs::OpenOptions;
use std::path::Path;

/// Memory-mapped block source for disk image files
///
/// Only regular files can be mapped; devices and pipes report a zero
/// length and are refused.
pub struct MmapBlockSource {
    /// `None` for an empty input, which cannot be mapped
    mmap: Option<Mmap>,
    position: usize,
}

impl MmapBlockSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BlockSourceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| BlockSourceError::from_open(&path.display().to_string(), e))?;

        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(BlockSourceError::NotRegularFile(path.display().to_string()));
        }

        let len = metadata.len();
        let mmap = if len == 0 {
            None
        } else {
            // The mapping is read-only and lives no longer than this source.
            Some(unsafe { Mmap::map(&file) }?)
        };

        tracing::debug!(path = %path.display(), len, "mapped input");

        Ok(Self { mmap, position: 0 })
    }

    /// Length of the mapped input in bytes
    pub fn len(&self) -> u64 {
        self.mmap.as_ref().map_or(0, |m| m.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlockSource for MmapBlockSource {
    fn read_block(&mut self, block: &mut [u8]) -> Result<bool, BlockSourceError> {
        let Some(mmap) = self.mmap.as_ref() else {
            return Ok(false);
        };
        if block.is_empty() {
            return Ok(false);
        }

        let start = self.position;
        let end = match start.checked_add(block.len()) {
            Some(end) if end <= mmap.len() => end,
            _ => return Ok(false),
        };

        block.copy_from_slice(&mmap[start..end]);
        self.position = end;
        Ok(true)
    }

    fn position(&self) -> u64 {
        self.position as u64
    }
}
