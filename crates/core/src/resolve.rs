//! Loading raw document text from logical paths.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Source of raw document text keyed by logical path.
pub trait ContentResolver {
    /// Returns the document text for `path`.
    ///
    /// Fails with [`ConvertError::NotFound`] when no document exists there.
    fn resolve(&self, path: &Path) -> Result<String, ConvertError>;
}

/// Resolves logical paths against a directory on disk.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    /// Creates a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentResolver for FsResolver {
    fn resolve(&self, path: &Path) -> Result<String, ConvertError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|err| ConvertError::read(path, err))
    }
}
