//! Recover images use case
//!
//! Opens the input, prepares the output location and runs the carver.

use crate::application::dto::{CarveReport, InputMode, RecoverOptions};
use crate::domain::entities::OutputName;
use crate::domain::repositories::BlockSource;
use crate::domain::services::Carver;
use crate::error::{RecoverError, Result};
use crate::infrastructure::block_device::{MmapBlockSource, ReaderBlockSource};
use crate::infrastructure::persistence::{LocalSinkFactory, MemorySinkFactory};
use std::fs;
use std::time::Instant;

/// Recover images use case
///
/// Carves every JPEG found in a block-aligned dump into the output
/// directory. The input and the current output are released when the run
/// ends, whether it succeeds or not.
pub struct RecoverImagesUseCase {
    options: RecoverOptions,
}

impl RecoverImagesUseCase {
    pub fn new(options: RecoverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RecoverOptions {
        &self.options
    }

    /// Executes the recovery
    pub fn execute(&self) -> Result<CarveReport> {
        let start_time = Instant::now();
        let options = &self.options;

        tracing::info!(
            input = %options.input.display(),
            block_size = options.block_size.get(),
            mode = ?options.input_mode,
            dry_run = options.dry_run,
            "starting recovery"
        );

        if !options.dry_run {
            self.check_input_not_overwritten()?;
        }

        let source = self.open_source()?;
        let (summary, output_dir) = if options.dry_run {
            let mut carver = Carver::new(MemorySinkFactory::discarding());
            (carver.scan(source, options.block_size)?, None)
        } else {
            let mut carver = Carver::new(LocalSinkFactory::new(&options.output_dir)?);
            (
                carver.scan(source, options.block_size)?,
                Some(options.output_dir.clone()),
            )
        };

        let duration = start_time.elapsed();

        tracing::info!(
            files = summary.file_count(),
            blocks = summary.blocks_read,
            discarded = summary.blocks_discarded,
            "recovery complete in {:.2}s",
            duration.as_secs_f64()
        );

        Ok(CarveReport::new(
            options.input.clone(),
            output_dir,
            summary,
            duration,
        ))
    }

    /// Fails if carving would truncate the input while it is being read
    fn check_input_not_overwritten(&self) -> Result<()> {
        let input = &self.options.input;
        let is_output_name = input
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(OutputName::could_be);
        if !is_output_name {
            return Ok(());
        }

        // A missing input or output directory cannot collide.
        let (Ok(input_path), Ok(output_dir)) = (
            fs::canonicalize(input),
            fs::canonicalize(&self.options.output_dir),
        ) else {
            return Ok(());
        };

        if input_path.parent() == Some(output_dir.as_path()) {
            return Err(RecoverError::invalid_argument(format!(
                "Input {} would be overwritten by recovered images in {}",
                input.display(),
                self.options.output_dir.display()
            )));
        }
        Ok(())
    }

    fn open_source(&self) -> Result<Box<dyn BlockSource>> {
        let input = &self.options.input;
        let source: Box<dyn BlockSource> = match self.options.input_mode {
            InputMode::Buffered => Box::new(ReaderBlockSource::open(input)?),
            InputMode::Mmap => Box::new(MmapBlockSource::open(input)?),
        };
        Ok(source)
    }
}
