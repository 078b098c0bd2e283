//! # Predprey IO
//!
//! Persistence of simulation output.
//!
//! This crate provides:
//! - Structured error handling with a custom error type
//! - JSON serialization helpers
//! - Writing and reading step-indexed population logs as JSON,
//!   gzip-compressed JSON or CSV

/// Error types and result aliases for I/O operations
pub mod error;
/// Population log files
pub mod history;
/// Validated JSON serialization helpers
pub mod serialization;

pub use error::{IoError, Result};
pub use history::{read_population_log, write_population_log, HistoryFormat};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
