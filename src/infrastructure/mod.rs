//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories: where blocks are
//! read from and where carved outputs are written.

pub mod block_device;
pub mod persistence;
