//! Recover options DTO

use crate::domain::entities::BlockSize;
use std::path::PathBuf;

/// How the input is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Buffered sequential reads
    #[default]
    Buffered,
    /// Memory-mapped input
    Mmap,
}

/// Options for a recovery run
#[derive(Debug, Clone)]
pub struct RecoverOptions {
    /// Path to the raw dump
    pub input: PathBuf,
    /// Block size of the medium
    pub block_size: BlockSize,
    /// Directory receiving `000.jpg`, `001.jpg`, ...
    pub output_dir: PathBuf,
    pub input_mode: InputMode,
    /// Scan and count without writing any output
    pub dry_run: bool,
}

impl RecoverOptions {
    /// Options writing into the current directory
    pub fn new(input: impl Into<PathBuf>, block_size: BlockSize) -> Self {
        Self {
            input: input.into(),
            block_size,
            output_dir: PathBuf::from("."),
            input_mode: InputMode::default(),
            dry_run: false,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
