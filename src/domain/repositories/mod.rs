//! Repository traits (interfaces)
//!
//! These traits define the contracts for the carver's external
//! collaborators: where blocks come from and where outputs go.

mod block_source;
mod output_sink;

pub use block_source::{BlockSource, BlockSourceError};
pub use output_sink::{OutputSink, SinkError, SinkFactory};
