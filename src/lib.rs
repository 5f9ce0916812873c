//! Signature-only JPEG recovery from block-aligned raw dumps.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use application::dto::{CarveReport, InputMode, RecoverOptions};
pub use application::RecoverImagesUseCase;
pub use domain::entities::{is_jpeg_signature, BlockSize, CarvedFile, OutputName};
pub use domain::services::{CarveError, CarveSummary, Carver};
pub use error::RecoverError;
