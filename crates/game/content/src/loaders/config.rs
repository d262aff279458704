//! Game configuration loader.

use std::path::Path;

use lineage_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field is optional; missing fields keep their [`GameConfig::default`]
/// values.
///
/// ```toml
/// bootstrap_generations = 21
/// bootstrap_name = "Test"
/// bootstrap_weapon = "daggers"
/// bootstrap_attribute = "strength"
/// bootstrap_ability = "stealth"
/// seed = 1234
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_core::Attribute;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = ConfigLoader::parse(
            r#"
            bootstrap_generations = 5
            bootstrap_attribute = "intellect"
            seed = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.bootstrap_generations, 5);
        assert_eq!(config.bootstrap_attribute, Attribute::Intellect);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.bootstrap_name, "Test");
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        let err = ConfigLoader::parse(r#"bootstrap_attribute = "wisdom""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
