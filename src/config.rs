//! Configuration management for pocketchain

use crate::error::{ChainError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub miner: MinerConfig,
}

#[derive(Debug, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,
    #[serde(default = "default_mining_reward")]
    pub mining_reward: u64,
}

#[derive(Debug, Deserialize)]
pub struct MinerConfig {
    #[serde(default = "default_beneficiary")]
    pub beneficiary: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            mining_reward: default_mining_reward(),
        }
    }
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            beneficiary: default_beneficiary(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            miner: MinerConfig::default(),
        }
    }
}

fn default_difficulty() -> u32 {
    2
}

fn default_mining_reward() -> u64 {
    100
}

fn default_beneficiary() -> String {
    "default-miner".to_string()
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let config_str = fs::read_to_string(path).unwrap_or_default();
        let config: Config = if config_str.is_empty() {
            Config::default()
        } else {
            toml::from_str(&config_str)
                .map_err(|e| ChainError::ConfigError(e.to_string()))?
        };

        // Validate critical values
        if config.ledger.difficulty == 0 {
            return Err(ChainError::ConfigError(
                "ledger.difficulty must be at least 1".to_string(),
            ));
        }
        if config.miner.beneficiary.is_empty() {
            return Err(ChainError::ConfigError(
                "miner.beneficiary must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}
