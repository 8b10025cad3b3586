//! # Configuration Management Module
//!
//! Loads the starting state of a run from a TOML file: the player's wallet,
//! the starting loadout, which item to buy, console color behavior, logging,
//! and optionally a replacement item catalog.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [player]
//! level = 5
//! coin = 175000.0
//! gem = 500.0
//! health = 100
//!
//! [loadout]
//! suit = "ninja_suit"
//! sword = "ninja_sword"
//! purchase = "snake_sword"
//!
//! [console]
//! color = "auto"   # auto | always | never
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! When no `[items.*]` tables are present the built-in catalog is used.
//! A missing config file means "all defaults" for [`Config::load_or_default`].

use anyhow::{anyhow, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::economy::{Catalog, PlayerInfo, Slot, NINJA_SUIT, NINJA_SWORD, SNAKE_SWORD};
use crate::logutil::ColorMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub level: u32,
    pub coin: f64,
    pub gem: f64,
    pub health: u32,
}

/// Catalog keys for the starting gear and the item the script buys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutConfig {
    pub suit: String,
    pub sword: String,
    pub purchase: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub player: PlayerConfig,
    pub loadout: LoadoutConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "Catalog::builtin")]
    pub items: Catalog,
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }

    /// Write the default configuration, refusing to replace an existing
    /// file unless `force` is set.
    pub fn write_default(path: impl AsRef<Path>, force: bool) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(anyhow!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ));
        }
        Self::create_default(path)?;
        info!("Configuration file created at {}", path.display());
        Ok(())
    }

    /// Reject funds the economy could never produce and loadout keys that
    /// do not resolve in the catalog.
    pub fn validate(&self) -> Result<()> {
        check_amount("player.coin", self.player.coin)?;
        check_amount("player.gem", self.player.gem)?;

        for (key, item) in self.items.iter() {
            check_amount(&format!("items.{}.info.price", key), item.info().price)?;
            if item.label().trim().is_empty() {
                return Err(anyhow!("items.{}.info.label must not be empty", key));
            }
        }

        self.items
            .get_in_slot(&self.loadout.suit, Slot::Suit)
            .map_err(|e| anyhow!("loadout.suit: {}", e))?;
        self.items
            .get_in_slot(&self.loadout.sword, Slot::Sword)
            .map_err(|e| anyhow!("loadout.sword: {}", e))?;
        self.items
            .get(&self.loadout.purchase)
            .map_err(|e| anyhow!("loadout.purchase: {}", e))?;

        Ok(())
    }

    /// Fresh player state built from `[player]`.
    pub fn player_info(&self) -> PlayerInfo {
        PlayerInfo::new(
            self.player.level,
            self.player.coin,
            self.player.gem,
            self.player.health,
        )
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(anyhow!("{} must be a non-negative number, got {}", field, value));
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Config {
            player: PlayerConfig {
                level: 5,
                coin: 175_000.0,
                gem: 500.0,
                health: 100,
            },
            loadout: LoadoutConfig {
                suit: NINJA_SUIT.to_string(),
                sword: NINJA_SWORD.to_string(),
                purchase: SNAKE_SWORD.to_string(),
            },
            console: ConsoleConfig::default(),
            logging: LoggingConfig::default(),
            items: Catalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.console.color, ColorMode::Auto);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.items.len(), 3);
    }

    #[test]
    fn test_minimal_config_uses_builtin_catalog() {
        let config = Config::from_toml(
            r#"
[player]
level = 1
coin = 10.0
gem = 0.0
health = 15

[loadout]
suit = "ninja_suit"
sword = "ninja_sword"
purchase = "snake_sword"
"#,
        )
        .unwrap();
        assert_eq!(config.items, Catalog::builtin());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.player_info().is_need_help());
    }

    #[test]
    fn test_negative_funds_rejected() {
        let mut config = Config::default();
        config.player.gem = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("player.gem"));

        let mut config = Config::default();
        config.player.coin = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_loadout_slot_mismatch_rejected() {
        let mut config = Config::default();
        config.loadout.sword = NINJA_SUIT.to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("loadout.sword"));

        let mut config = Config::default();
        config.loadout.purchase = "golden_sword".to_string();
        assert!(config.validate().is_err());
    }
}
