//! CLI configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use lineage_content::ContentFactory;
use lineage_core::GameConfig;

/// CLI client configuration.
///
/// Environment values override whatever `config.toml` in the data directory
/// says.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `config.toml`, if any.
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub generations: Option<usize>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LINEAGE_DATA_DIR` - Directory containing `config.toml`
    /// - `LINEAGE_SEED` - Session seed (default: system clock)
    /// - `LINEAGE_GENERATIONS` - Auto-generated ancestors (default: 21)
    /// - `LINEAGE_SESSION_ID` - Log session name (default: `session_<timestamp>`)
    /// - `LINEAGE_LOG_DIR` - Log root directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("LINEAGE_DATA_DIR").map(PathBuf::from),
            seed: read_env::<u64>("LINEAGE_SEED"),
            generations: read_env::<usize>("LINEAGE_GENERATIONS"),
            session_id: env::var("LINEAGE_SESSION_ID").ok().filter(|id| !id.is_empty()),
            log_dir: env::var_os("LINEAGE_LOG_DIR").map(PathBuf::from),
        }
    }

    /// Resolve the game configuration: data file first, then environment
    /// overrides.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.data_dir {
            Some(dir) => ContentFactory::new(dir).load_config_or_default()?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(generations) = self.generations {
            config.bootstrap_generations = generations;
        }

        Ok(config)
    }
}

/// Seed derived from the system clock, for sessions without a configured one.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
