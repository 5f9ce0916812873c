//! Presentation layer
//!
//! Command-line interface of the `recover` binary.

pub mod cli;
