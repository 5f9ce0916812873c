//! Domain services
//!
//! Core business logic that operates on domain entities.

mod carver;

pub use carver::{CarveError, CarveSummary, Carver};
