// src/save/src/lib.rs
//! Save slots on disk.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;
use bincode::{Decode, Encode, config};
use error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

mod record;

pub use record::{EquipmentRecord, PlayerRecord};

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

fn default_version() -> u32 {
    SAVE_VERSION
}

/// One saved game.
///
/// In JSON the player fields sit at the top level next to `version` and
/// `saved_at`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Unix seconds
    #[serde(default)]
    pub saved_at: u64,
    #[serde(flatten)]
    pub player: PlayerRecord,
}

impl SaveData {
    /// Stamp `player` with the current version and time.
    pub fn new(player: PlayerRecord) -> Self {
        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            version: SAVE_VERSION,
            saved_at,
            player,
        }
    }
}

/// On-disk encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Human readable, the default
    #[default]
    Json,
    Binary,
}

impl SaveFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Json => "json",
            SaveFormat::Binary => "sav",
        }
    }

    fn encode(self, data: &SaveData) -> Result<Vec<u8>, GameError> {
        match self {
            SaveFormat::Json => serde_json::to_vec_pretty(data).map_err(|e| GameError::SerializationError(e.to_string())),
            SaveFormat::Binary => Ok(bincode::encode_to_vec(data, config::standard())?),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<SaveData, GameError> {
        match self {
            SaveFormat::Json => Ok(serde_json::from_slice(bytes)?),
            SaveFormat::Binary => {
                let (data, _) = bincode::decode_from_slice(bytes, config::standard())?;
                Ok(data)
            }
        }
    }
}

/// What a save menu shows for one occupied slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub slot: usize,
    pub name: String,
    pub level: u32,
    pub location: String,
    pub saved_at: u64,
}

/// Fixed number of numbered save slots in one directory.
#[derive(Debug, Clone)]
pub struct SaveSystem {
    save_dir: PathBuf,
    max_slots: usize,
    format: SaveFormat,
}

impl SaveSystem {
    /// Open (creating if needed) a save directory with JSON saves.
    pub fn new(save_dir: impl AsRef<Path>, max_slots: usize) -> Result<Self, GameError> {
        let save_dir = save_dir.as_ref();
        if !save_dir.exists() {
            fs::create_dir_all(save_dir).context("Failed to create save directory")?;
        }
        Ok(Self {
            save_dir: save_dir.to_path_buf(),
            max_slots,
            format: SaveFormat::default(),
        })
    }

    pub fn with_format(mut self, format: SaveFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> SaveFormat {
        self.format
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn check_slot(&self, slot: usize) -> Result<(), GameError> {
        if slot >= self.max_slots {
            return Err(GameError::InvalidSlot {
                slot,
                max: self.max_slots,
            });
        }
        Ok(())
    }

    /// Path of a slot's file, `None` for an out-of-range slot.
    pub fn save_path(&self, slot: usize) -> Option<PathBuf> {
        (slot < self.max_slots).then(|| self.slot_path(slot))
    }

    /// Write `data` to `slot`, replacing any previous save atomically.
    pub fn save_game(&self, slot: usize, data: &SaveData) -> Result<(), GameError> {
        self.check_slot(slot)?;
        let path = self.slot_path(slot);
        let bytes = self.format.encode(data)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).context("Failed to create temporary save file")?;
        file.write_all(&bytes).context("Failed to write save data")?;
        file.flush().context("Failed to flush save data")?;
        drop(file);
        fs::rename(&temp_path, &path).context("Failed to commit save file")?;

        info!(slot, name = %data.player.name, path = %path.display(), "game saved");
        Ok(())
    }

    /// Read `slot`. A slot with no file is `Ok(None)`.
    pub fn load_game(&self, slot: usize) -> Result<Option<SaveData>, GameError> {
        self.check_slot(slot)?;
        let path = self.slot_path(slot);
        if !path.exists() {
            debug!(slot, "no save in slot");
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let data = self.format.decode(&bytes)?;
        if data.version > SAVE_VERSION {
            warn!(slot, version = data.version, "save is newer than this build");
        }
        info!(slot, name = %data.player.name, "game loaded");
        Ok(Some(data))
    }

    pub fn delete_save(&self, slot: usize) -> Result<(), GameError> {
        self.check_slot(slot)?;
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path).context("Failed to delete save file")?;
        }
        Ok(())
    }

    pub fn has_save(&self, slot: usize) -> bool {
        self.save_path(slot).is_some_and(|p| p.exists())
    }

    /// Occupied slots, newest first. Unreadable files are skipped.
    pub fn list_saves(&self) -> Result<Vec<SaveSummary>, GameError> {
        let mut saves = Vec::new();
        for slot in 0..self.max_slots {
            match self.load_game(slot) {
                Ok(Some(data)) => saves.push(SaveSummary {
                    slot,
                    name: data.player.name,
                    level: data.player.level,
                    location: data.player.location,
                    saved_at: data.saved_at,
                }),
                Ok(None) => {}
                Err(err) => warn!(slot, %err, "skipping unreadable save"),
            }
        }
        saves.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(saves)
    }

    fn slot_path(&self, slot: usize) -> PathBuf {
        self.save_dir
            .join(format!("save_{slot}.{}", self.format.extension()))
    }
}

#[cfg(test)]
mod tests;
