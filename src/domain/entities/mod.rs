//! Domain entities
//!
//! The values the carving domain talks about: block sizes, the JPEG
//! signature, output names and the records of carved files.

mod block_size;
mod carved_file;
mod jpeg_signature;
mod output_name;

pub use block_size::BlockSize;
pub use carved_file::CarvedFile;
pub use jpeg_signature::{
    is_jpeg_signature, JPEG_APP_MARKERS, JPEG_SIGNATURE_LEN, JPEG_SOI_PREFIX,
};
pub use output_name::{OutputName, OUTPUT_EXTENSION, OUTPUT_INDEX_WIDTH};
