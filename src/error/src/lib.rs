//! Game error handling.
//!
//! Covers the failures that cross crate boundaries: persistence, save
//! integrity and (de)serialization. Domain rules (equipping, travel, combat)
//! keep their own error enums next to the code that raises them.

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors raised while persisting or restoring game state.
#[derive(Debug, Error)]
pub enum GameError {
    /// Save system error
    #[error("Save system error: {0}")]
    SaveError(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Slot index outside the configured range
    #[error("Invalid save slot {slot} (max {max})")]
    InvalidSlot { slot: usize, max: usize },

    #[error("Corrupted save data")]
    CorruptedSave,

    /// Save parsed but describes an impossible character
    #[error("Invalid hero data: {0}")]
    InvalidHeroData(String),

    /// Config file exists but could not be understood
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<DecodeError> for GameError {
    fn from(err: DecodeError) -> Self {
        // A binary save that stops mid-record is treated as corrupted
        match err {
            DecodeError::UnexpectedEnd { .. } => GameError::CorruptedSave,
            other => GameError::DeserializationError(other.to_string()),
        }
    }
}

impl From<EncodeError> for GameError {
    fn from(err: EncodeError) -> Self {
        GameError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_eof() {
            GameError::CorruptedSave
        } else if err.is_io() {
            GameError::IoError(err.into())
        } else {
            GameError::DeserializationError(err.to_string())
        }
    }
}

/// Turn an error into a short message fit for the player.
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::CorruptedSave => "Save data is corrupted and cannot be loaded".to_string(),
        GameError::InvalidSlot { slot, .. } => format!("There is no save slot {slot}"),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Save file does not exist".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to access the save file".to_string()
            }
            _ => format!("IO error: {e}"),
        },
        _ => error.to_string(),
    }
}
