//! Buffered reader block source
//!
//! Reads fixed-size blocks from any `std::io::Read`. When the input length
//! is known up front (regular files), a trailing fragment shorter than a
//! block is skipped without being read.

use crate::domain::repositories::{BlockSource, BlockSourceError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Sequential block source over a reader
///
/// # Example
///
/// ```ignore
/// let mut source = ReaderBlockSource::open("card.raw")?;
/// let mut block = vec![0u8; 512];
/// while source.read_block(&mut block)? {
///     // ...
/// }
/// ```
pub struct ReaderBlockSource<R: Read> {
    reader: R,
    /// Total input length, if known
    len: Option<u64>,
    position: u64,
    trailing_bytes: u64,
    exhausted: bool,
}

impl ReaderBlockSource<BufReader<File>> {
    /// Opens a disk image or device file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BlockSourceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| BlockSourceError::from_open(&path.display().to_string(), e))?;

        let metadata = file.metadata()?;
        let len = metadata.is_file().then(|| metadata.len());

        tracing::debug!(path = %path.display(), len = ?len, "opened input");

        Ok(Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, file),
            len,
            position: 0,
            trailing_bytes: 0,
            exhausted: false,
        })
    }
}

impl<R: Read> ReaderBlockSource<R> {
    /// Wraps a reader of unknown length
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            len: None,
            position: 0,
            trailing_bytes: 0,
            exhausted: false,
        }
    }

    /// Length of the fragment after the last whole block, once exhausted
    pub fn trailing_bytes(&self) -> u64 {
        self.trailing_bytes
    }

    fn fill(&mut self, block: &mut [u8]) -> Result<usize, BlockSourceError> {
        let mut filled = 0;
        while filled < block.len() {
            match self.reader.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(BlockSourceError::ReadError {
                        offset: self.position + filled as u64,
                        source: e,
                    });
                }
            }
        }
        Ok(filled)
    }

    fn finish(&mut self, trailing: u64) {
        self.exhausted = true;
        self.trailing_bytes = trailing;
        if trailing > 0 {
            tracing::debug!(
                offset = self.position,
                bytes = trailing,
                "ignoring trailing fragment shorter than a block"
            );
        }
    }
}

impl<R: Read> BlockSource for ReaderBlockSource<R> {
    fn read_block(&mut self, block: &mut [u8]) -> Result<bool, BlockSourceError> {
        if self.exhausted || block.is_empty() {
            return Ok(false);
        }

        if let Some(len) = self.len {
            let remaining = len.saturating_sub(self.position);
            if remaining < block.len() as u64 {
                self.finish(remaining);
                return Ok(false);
            }
        }

        let filled = self.fill(block)?;
        if filled < block.len() {
            self.finish(filled as u64);
            return Ok(false);
        }

        self.position += filled as u64;
        Ok(true)
    }

    fn position(&self) -> u64 {
        self.position
    }
}
