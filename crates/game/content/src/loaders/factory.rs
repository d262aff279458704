//! Content factory for loading session data from a data directory.

use std::path::{Path, PathBuf};

use lineage_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult};

/// Content factory that loads all content from a data directory.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        ConfigLoader::load(&path)
    }

    /// Load `config.toml` if present, defaults otherwise. A file that exists
    /// but fails to parse is still an error.
    pub fn load_config_or_default(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_config_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "bootstrap_generations = 3\nbootstrap_name = \"Elder\"\n",
        )
        .unwrap();

        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config.bootstrap_generations, 3);
        assert_eq!(config.bootstrap_name, "Elder");
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert!(factory.load_config().is_err());
        assert_eq!(factory.load_config_or_default().unwrap(), GameConfig::default());
    }

    #[test]
    fn broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "bootstrap_generations = \"many\"").unwrap();

        assert!(ContentFactory::new(dir.path()).load_config_or_default().is_err());
    }
}
