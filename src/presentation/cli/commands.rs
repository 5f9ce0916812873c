//! CLI arguments using clap

use crate::application::dto::{InputMode, RecoverOptions};
use crate::domain::entities::BlockSize;
use crate::error::{RecoverError, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// recover - JPEG recovery from raw block dumps
///
/// Scans a memory-card or disk image block by block and writes every JPEG
/// found at a block boundary to 000.jpg, 001.jpg, ...
#[derive(Parser, Debug)]
#[command(name = "recover")]
#[command(version)]
#[command(about = "Recover JPEG images from a block-aligned raw dump", long_about = None)]
pub struct Cli {
    /// Raw dump to scan (e.g. card.raw, /dev/sdb)
    pub infile: PathBuf,

    /// Block size of the medium in bytes (e.g. 512)
    #[arg(allow_hyphen_values = true)]
    pub block_size: String,

    /// Directory for recovered images
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Memory-map the input instead of reading it
    #[arg(long)]
    pub mmap: bool,

    /// Scan and count images without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of the carved files to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Parses `args`, the first being the program name.
    ///
    /// Help and version requests are printed here and yield `Ok(None)`.
    pub fn parse_args<I, T>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(e) if !e.use_stderr() => {
                let _ = e.print();
                Ok(None)
            }
            Err(e) => Err(RecoverError::usage(e.render().to_string())),
        }
    }

    /// Converts the arguments into recovery options
    pub fn to_options(&self) -> Result<RecoverOptions> {
        let block_size = parse_block_size(&self.block_size)?;
        let input_mode = if self.mmap {
            InputMode::Mmap
        } else {
            InputMode::Buffered
        };

        Ok(RecoverOptions::new(&self.infile, block_size)
            .with_output_dir(&self.output_dir)
            .with_input_mode(input_mode)
            .dry_run(self.dry_run))
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else if self.verbose {
            LevelFilter::INFO
        } else {
            LevelFilter::WARN
        }
    }
}

/// Parses a block size made only of decimal digits
pub fn parse_block_size(arg: &str) -> Result<BlockSize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecoverError::invalid_argument("Block size must be a number"));
    }

    let bytes: usize = arg
        .parse()
        .map_err(|_| RecoverError::invalid_argument(format!("Block size {} is too large", arg)))?;

    BlockSize::new(bytes)
        .ok_or_else(|| RecoverError::invalid_argument("Block size must be greater than zero"))
}
