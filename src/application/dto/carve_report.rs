//! Carve report DTO

use crate::domain::entities::CarvedFile;
use crate::domain::services::CarveSummary;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Result of a recovery run, serialisable as JSON
#[derive(Debug, Clone, Serialize)]
pub struct CarveReport {
    /// Source dump path
    pub input: PathBuf,
    /// Output directory, absent on dry runs
    pub output_dir: Option<PathBuf>,
    pub block_size: usize,
    pub blocks_read: u64,
    pub blocks_discarded: u64,
    pub bytes_written: u64,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
    pub files: Vec<CarvedFile>,
}

impl CarveReport {
    pub fn new(
        input: PathBuf,
        output_dir: Option<PathBuf>,
        summary: CarveSummary,
        duration: Duration,
    ) -> Self {
        Self {
            input,
            output_dir,
            block_size: summary.block_size,
            blocks_read: summary.blocks_read,
            blocks_discarded: summary.blocks_discarded,
            bytes_written: summary.bytes_written(),
            duration,
            files: summary.files,
        }
    }

    /// Number of carved files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}
