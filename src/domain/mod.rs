//! Domain layer - Core business logic
//!
//! This module contains the carving entities, the traits for the carver's
//! collaborators, and the carver itself. It performs no I/O of its own.

pub mod entities;
pub mod repositories;
pub mod services;
