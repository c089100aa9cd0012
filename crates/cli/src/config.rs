//! Driver configuration loaded from YAML and command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use helpmdx_core::ConvertOptions;

use crate::error::DriverError;

/// Where to read sources from, where to write results, and how to convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriverConfig {
    /// Directory holding standalone documents.
    pub docs_dir: PathBuf,
    /// Directory holding fragments that other documents include.
    pub include_dir: PathBuf,
    /// Output directory; removed and recreated on every run.
    pub output_dir: PathBuf,
    /// Subdirectory of `output_dir` that receives converted fragments.
    pub include_output_subdir: String,
    /// Source file names to skip (e.g. `index.md`).
    pub exclude: Vec<String>,
    /// Worker cap; defaults to one worker per CPU.
    pub max_threads: Option<usize>,
    /// Rewrite options.
    pub convert: ConvertOptions,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("templates/zerver/help"),
            include_dir: PathBuf::from("templates/zerver/help/include"),
            output_dir: PathBuf::from("starlight_help/src/content/docs"),
            include_output_subdir: "include".to_string(),
            exclude: Vec::new(),
            max_threads: None,
            convert: ConvertOptions::default(),
        }
    }
}

impl DriverConfig {
    /// Reads a YAML configuration file; missing keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, DriverError> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| DriverError::config(path, err.to_string()))?;
        Self::from_yaml_str(&text).map_err(|err| DriverError::config(path, err.to_string()))
    }

    /// Parses YAML configuration text.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Directory converted fragments are written to.
    pub fn include_output_dir(&self) -> PathBuf {
        self.output_dir.join(&self.include_output_subdir)
    }

    /// Returns true when `file_name` is on the exclusion list.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude.iter().any(|name| name == file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let config = DriverConfig::from_yaml_str("  \n").expect("parse");
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn nested_convert_options_merge() {
        let yaml = "outputDir: out\nexclude: [index.md]\nconvert:\n  links:\n    from: /docs/\n";
        let config = DriverConfig::from_yaml_str(yaml).expect("parse");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.is_excluded("index.md"));
        assert!(!config.is_excluded("other.md"));
        assert_eq!(config.convert.links.from, "/docs/");
        assert_eq!(config.convert.links.to, "/help-beta/");
        assert_eq!(config.include_output_dir(), PathBuf::from("out/include"));
    }

    #[test]
    fn unreadable_file_is_config_error() {
        let err = DriverConfig::from_yaml_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, DriverError::Config { .. }), "{err:?}");
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("helpmdx.yaml");
        std::fs::write(&path, "maxThreads: [oops").expect("write");
        let err = DriverConfig::from_yaml_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"), "{err}");
    }
}
