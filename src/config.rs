//! Game configuration loaded from a TOML file.
//!
//! ```toml
//! seed = 42
//!
//! [save]
//! dir = "saves"
//! slots = 3
//! format = "json"
//!
//! [rules]
//! encounter_chance = 0.6
//! flee_chance = 0.5
//!
//! [log]
//! level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use combat::CombatRules;
use error::GameError;
use save::SaveFormat;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    pub save: SaveConfig,
    pub rules: CombatRules,
    pub log: LogConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save: SaveConfig::default(),
            rules: CombatRules::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub dir: PathBuf,
    pub slots: usize,
    pub format: SaveFormat,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("saves"),
            slots: 3,
            format: SaveFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load from `path`. A missing file gives the defaults; a file that
    /// exists but does not parse or holds impossible values is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, GameError> {
        let config: Self = toml::from_str(content).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, GameError> {
        toml::to_string_pretty(self).map_err(|e| GameError::SerializationError(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let rules = &self.rules;
        for (name, p) in [
            ("encounter_chance", rules.encounter_chance),
            ("flee_chance", rules.flee_chance),
            ("enemy_skill_chance", rules.enemy_skill_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GameError::InvalidConfig(format!("{name} must be within 0..=1, got {p}")));
            }
        }
        if self.save.slots == 0 {
            return Err(GameError::InvalidConfig("save.slots must be at least 1".into()));
        }
        if rules.safe_hub.trim().is_empty() {
            return Err(GameError::InvalidConfig("rules.safe_hub must not be empty".into()));
        }
        Ok(())
    }
}
