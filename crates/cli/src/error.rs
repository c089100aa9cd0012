use std::path::PathBuf;
use thiserror::Error;

use helpmdx_core::ConvertError;

/// Errors that abort a batch conversion.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A source document could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ConvertError),
    /// The output directory could not be reset or created.
    #[error("Cannot prepare output directory {}: {source}", path.display())]
    OutputDirectory {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A source directory could not be listed.
    #[error("Cannot list {}: {source}", path.display())]
    Walk {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying walkdir error.
        #[source]
        source: walkdir::Error,
    },
    /// A converted document could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Output file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration {}: {message}", path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Read or parse failure description.
        message: String,
    },
    /// The worker pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl DriverError {
    pub(crate) fn output_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDirectory {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
