//! Application layer
//!
//! Use cases that wire the carver to concrete inputs and outputs.

pub mod dto;
mod recover_images;

pub use recover_images::RecoverImagesUseCase;
