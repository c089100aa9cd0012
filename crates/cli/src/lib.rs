#![deny(missing_docs)]
//! helpmdx driver: walks the help center sources, converts each document
//! with `helpmdx-core`, and writes the Starlight content tree.

/// Batch statistics.
pub mod batch;
/// Driver configuration.
pub mod config;
/// Directory traversal and batch conversion.
pub mod driver;
/// Driver error types.
pub mod error;

pub use batch::BatchStats;
pub use config::DriverConfig;
pub use driver::{collect_sources, output_path, reset_output_dirs, run};
pub use error::DriverError;
