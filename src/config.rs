//! Driver configuration, loaded from TOML.
//!
//! ```
//! use slider_search::config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     ids_max_depth = 20
//!     precheck_solvable = false
//! "#).unwrap();
//!
//! assert_eq!(config.ids_max_depth, Some(20));
//! assert!(!config.precheck_solvable);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Depth cap for iterative deepening. `None` uses `4·N²`.
    pub ids_max_depth: Option<usize>,

    /// Refuse boards that are unsolvable by parity before searching.
    pub precheck_solvable: bool,

    /// Where the result line is written.
    pub output: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ids_max_depth: None,
            precheck_solvable: true,
            output: PathBuf::from("output.txt"),
        }
    }
}

impl SearchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output path is empty".into()));
        }
        Ok(())
    }

    pub fn with_ids_max_depth(mut self, depth: usize) -> Self {
        self.ids_max_depth = Some(depth);
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.output, PathBuf::from("output.txt"));
        assert!(config.precheck_solvable);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = SearchConfig::from_toml_str("max_nodes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_empty_output() {
        let err = SearchConfig::from_toml_str(r#"output = """#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn builder_overrides() {
        let config = SearchConfig::default()
            .with_ids_max_depth(12)
            .with_output("result.txt");
        assert_eq!(config.ids_max_depth, Some(12));
        assert_eq!(config.output, PathBuf::from("result.txt"));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, "ids_max_depth = 9\noutput = \"out.txt\"\n").unwrap();
        let config = SearchConfig::load(&path).unwrap();
        assert_eq!(config.ids_max_depth, Some(9));
        assert_eq!(config.output, PathBuf::from("out.txt"));
    }
}
