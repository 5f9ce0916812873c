//! Block source implementations

mod mmap_block_source;
mod reader_block_source;

pub use mmap_block_source::MmapBlockSource;
pub use reader_block_source::ReaderBlockSource;
