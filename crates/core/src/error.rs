use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a document for conversion.
///
/// The rewrite passes themselves never fail; every variant here comes from
/// resolving a logical document path into raw text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The content source has no document at the requested path.
    #[error("Document not found: {}", path.display())]
    NotFound {
        /// Logical path that failed to resolve.
        path: PathBuf,
    },
    /// The document exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Logical path that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Create a not-found error for a logical path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a read error, folding `NotFound` IO errors into [`ConvertError::NotFound`].
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Logical path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::NotFound { path } => path,
            ConvertError::Read { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn read_folds_missing_files_into_not_found() {
        let err = ConvertError::read("help/missing.md", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ConvertError::NotFound { .. }), "{err:?}");
        assert_eq!(err.to_string(), "Document not found: help/missing.md");
    }

    #[test]
    fn read_keeps_other_io_failures() {
        let err = ConvertError::read(
            "help/locked.md",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ConvertError::Read { .. }), "{err:?}");
        assert_eq!(err.path(), std::path::Path::new("help/locked.md"));
    }
}
