//! Output sink implementations

mod local_sink_factory;
mod memory_sink_factory;

pub use local_sink_factory::{LocalFileSink, LocalSinkFactory};
pub use memory_sink_factory::{MemorySink, MemorySinkFactory};
