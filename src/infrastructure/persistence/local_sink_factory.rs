//! Local file sink factory
//!
//! Creates carved outputs as files in an output directory. Existing files
//! with the same name are truncated.

use crate::domain::repositories::{OutputSink, SinkError, SinkFactory};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink factory writing into a local directory
pub struct LocalSinkFactory {
    output_dir: PathBuf,
    files_created: usize,
}

impl LocalSinkFactory {
    /// Creates a factory for `output_dir`, creating the directory if needed
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, SinkError> {
        let output_dir = output_dir.as_ref();
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)
                .map_err(|e| SinkError::from_io(&output_dir.display().to_string(), e))?;
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            files_created: 0,
        })
    }

    /// Number of outputs created so far
    pub fn files_created(&self) -> usize {
        self.files_created
    }
}

impl SinkFactory for LocalSinkFactory {
    type Sink = LocalFileSink;

    fn create(&mut self, name: &str) -> Result<LocalFileSink, SinkError> {
        let path = self.output_dir.join(name);
        let file = File::create(&path)
            .map_err(|e| SinkError::from_io(&path.display().to_string(), e))?;

        self.files_created += 1;
        Ok(LocalFileSink {
            writer: BufWriter::new(file),
            path,
        })
    }
}

/// A carved output file being written
pub struct LocalFileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl LocalFileSink {
    fn error(&self, err: std::io::Error) -> SinkError {
        SinkError::from_io(&self.path.display().to_string(), err)
    }
}

impl OutputSink for LocalFileSink {
    fn write_block(&mut self, block: &[u8]) -> Result<(), SinkError> {
        self.writer.write_all(block).map_err(|e| self.error(e))
    }

    fn close(mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|e| self.error(e))?;
        self.writer.get_ref().sync_all().map_err(|e| self.error(e))
    }
}
