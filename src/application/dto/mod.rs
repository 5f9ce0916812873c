//! Data Transfer Objects

mod carve_report;
mod recover_options;

pub use carve_report::CarveReport;
pub use recover_options::{InputMode, RecoverOptions};
