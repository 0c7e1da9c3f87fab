//! `schemakind.toml` configuration.
//!
//! ```toml
//! # Include the bundled JDK table (default: true)
//! jdk = true
//!
//! # Extra type tables, relative to this file
//! types = ["types/domain.toml"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "schemakind.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_jdk")]
    pub jdk: bool,
    #[serde(default)]
    pub types: Vec<PathBuf>,
}

fn default_jdk() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jdk: true,
            types: Vec::new(),
        }
    }
}

impl Config {
    /// Load a config file. Relative `types` paths are resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            for table in &mut config.types {
                if table.is_relative() {
                    *table = base.join(&*table);
                }
            }
        }
        Ok(config)
    }

    /// Load `path` if given, else [`CONFIG_FILE`] from `dir` if it exists,
    /// else the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config");
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.jdk);
    }

    #[test]
    fn test_relative_tables_resolved() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "jdk = false\ntypes = [\"types/a.toml\", \"/abs/b.toml\"]\n",
        )
        .unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert!(!config.jdk);
        assert_eq!(config.types[0], dir.path().join("types/a.toml"));
        assert_eq!(config.types[1], PathBuf::from("/abs/b.toml"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::discover(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "jdk = true\ntables = []\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
