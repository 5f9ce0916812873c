//! Block carver service
//!
//! Splits a block-aligned input into JPEG outputs. Every block whose first
//! four bytes carry a JPEG signature closes the current output and opens
//! the next one; every block after the first match is copied verbatim.

use crate::domain::entities::{is_jpeg_signature, BlockSize, CarvedFile, OutputName};
use crate::domain::repositories::{
    BlockSource, BlockSourceError, OutputSink, SinkError, SinkFactory,
};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during a carve run
#[derive(Error, Debug)]
pub enum CarveError {
    #[error("Failed to read input: {0}")]
    Source(#[from] BlockSourceError),

    #[error("Failed to write output: {0}")]
    Sink(#[from] SinkError),
}

/// Outcome of a completed scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarveSummary {
    pub block_size: usize,
    /// Whole blocks read from the input
    pub blocks_read: u64,
    /// Blocks seen before the first signature, written nowhere
    pub blocks_discarded: u64,
    /// Outputs in creation order
    pub files: Vec<CarvedFile>,
}

impl CarveSummary {
    /// Number of outputs produced, equal to the number of matching blocks
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total bytes written across all outputs
    pub fn bytes_written(&self) -> u64 {
        self.files.iter().map(CarvedFile::bytes_written).sum()
    }
}

struct OpenOutput<S> {
    sink: S,
    record: CarvedFile,
}

/// Mutable state of one scan pass
///
/// At most one output is open at a time. `file_counter` only grows, so
/// output names are never reused within a run.
struct CarveSession<S: OutputSink> {
    current: Option<OpenOutput<S>>,
    file_counter: u64,
    blocks_read: u64,
    blocks_discarded: u64,
    finished: Vec<CarvedFile>,
}

impl<S: OutputSink> CarveSession<S> {
    fn new() -> Self {
        Self {
            current: None,
            file_counter: 0,
            blocks_read: 0,
            blocks_discarded: 0,
            finished: Vec::new(),
        }
    }

    fn close_current(&mut self) -> Result<(), SinkError> {
        if let Some(open) = self.current.take() {
            open.sink.close()?;
            tracing::debug!(
                name = open.record.name(),
                blocks = open.record.block_count(),
                "closed output"
            );
            self.finished.push(open.record);
        }
        Ok(())
    }

    fn open_next<F>(&mut self, factory: &mut F, block_index: u64) -> Result<(), SinkError>
    where
        F: SinkFactory<Sink = S>,
    {
        self.close_current()?;

        let name = OutputName::for_index(self.file_counter);
        let sink = factory.create(name.as_str())?;
        tracing::debug!(name = %name, block = block_index, "signature found, opened output");

        self.current = Some(OpenOutput {
            sink,
            record: CarvedFile::new(name.into_string(), block_index),
        });
        self.file_counter += 1;
        Ok(())
    }

    fn write(&mut self, block: &[u8]) -> Result<(), SinkError> {
        match self.current.as_mut() {
            Some(open) => {
                open.sink.write_block(block)?;
                open.record.record_block(block.len());
            }
            None => self.blocks_discarded += 1,
        }
        Ok(())
    }

    fn into_summary(self, block_size: BlockSize) -> CarveSummary {
        CarveSummary {
            block_size: block_size.get(),
            blocks_read: self.blocks_read,
            blocks_discarded: self.blocks_discarded,
            files: self.finished,
        }
    }
}

/// Signature-only JPEG carver
///
/// Owns the sink factory; each call to [`Carver::scan`] runs a fresh
/// session, so scanning the same input twice yields identical outputs.
///
/// # Example
///
/// ```
/// use jpeg_recover::domain::entities::BlockSize;
/// use jpeg_recover::domain::services::Carver;
/// use jpeg_recover::infrastructure::block_device::ReaderBlockSource;
/// use jpeg_recover::infrastructure::persistence::MemorySinkFactory;
///
/// let mut data = vec![0u8; 1024];
/// data[512..516].copy_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
///
/// let mut carver = Carver::new(MemorySinkFactory::new());
/// let summary = carver
///     .scan(ReaderBlockSource::new(&data[..]), BlockSize::FAT_SECTOR)
///     .unwrap();
/// assert_eq!(summary.file_count(), 1);
/// assert_eq!(summary.blocks_discarded, 1);
/// ```
pub struct Carver<F: SinkFactory> {
    factory: F,
}

impl<F: SinkFactory> Carver<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn into_factory(self) -> F {
        self.factory
    }

    /// Scans `source` to exhaustion in `block_size` steps
    ///
    /// On error the open output, if any, is dropped without being closed
    /// and the error is returned; no further blocks are read.
    pub fn scan<S: BlockSource>(
        &mut self,
        mut source: S,
        block_size: BlockSize,
    ) -> Result<CarveSummary, CarveError> {
        let mut block = vec![0u8; block_size.get()];
        let mut session: CarveSession<F::Sink> = CarveSession::new();

        while source.read_block(&mut block)? {
            let index = session.blocks_read;
            session.blocks_read += 1;

            if is_jpeg_signature(&block) {
                session.open_next(&mut self.factory, index)?;
            }
            session.write(&block)?;
        }

        session.close_current()?;
        tracing::trace!(
            blocks = session.blocks_read,
            files = session.file_counter,
            offset = source.position(),
            "input exhausted"
        );

        Ok(session.into_summary(block_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::block_device::ReaderBlockSource;
    use crate::infrastructure::persistence::MemorySinkFactory;

    const SOI: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

    fn image(blocks: &[bool], block_size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(blocks.len() * block_size);
        for (i, &is_start) in blocks.iter().enumerate() {
            let mut block = vec![i as u8; block_size];
            if is_start {
                block[..4].copy_from_slice(&SOI);
            }
            data.extend_from_slice(&block);
        }
        data
    }

    fn carve(data: &[u8], block_size: usize) -> (CarveSummary, MemorySinkFactory) {
        let mut carver = Carver::new(MemorySinkFactory::new());
        let summary = carver
            .scan(
                ReaderBlockSource::new(data),
                BlockSize::new(block_size).unwrap(),
            )
            .unwrap();
        (summary, carver.into_factory())
    }

    #[test]
    fn test_first_block_match() {
        let data = image(&[true, false], 16);
        let (summary, factory) = carve(&data, 16);

        assert_eq!(summary.file_count(), 1);
        assert_eq!(summary.blocks_discarded, 0);
        assert_eq!(factory.output("000.jpg").unwrap(), data);
    }

    #[test]
    fn test_back_to_back_matches() {
        let data = image(&[true, true], 16);
        let (summary, factory) = carve(&data, 16);

        assert_eq!(summary.file_count(), 2);
        assert_eq!(summary.files[0].block_count(), 1);
        assert_eq!(factory.output("000.jpg").unwrap(), &data[..16]);
        assert_eq!(factory.output("001.jpg").unwrap(), &data[16..]);
    }

    #[test]
    fn test_no_match_touches_no_sink() {
        let data = image(&[false, false, false], 16);
        let (summary, factory) = carve(&data, 16);

        assert_eq!(summary.file_count(), 0);
        assert_eq!(summary.blocks_discarded, 3);
        assert!(factory.created().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let (summary, factory) = carve(&[], 512);
        assert_eq!(summary.blocks_read, 0);
        assert_eq!(summary.file_count(), 0);
        assert!(factory.created().is_empty());
    }

    #[test]
    fn test_rescan_is_identical() {
        let data = image(&[false, true, false, true, false], 32);
        let mut carver = Carver::new(MemorySinkFactory::new());
        let size = BlockSize::new(32).unwrap();

        let first = carver.scan(ReaderBlockSource::new(&data[..]), size).unwrap();
        let first_out = carver.factory().outputs();
        let second = carver.scan(ReaderBlockSource::new(&data[..]), size).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_out, carver.factory().outputs());
    }
}
