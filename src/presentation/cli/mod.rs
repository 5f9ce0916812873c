//! CLI module

mod commands;

pub use commands::{parse_block_size, Cli};
