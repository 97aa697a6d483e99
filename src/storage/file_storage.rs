//! Card file storage
//!
//! Cards are serialized as a single JSON array of records. Loading a file
//! that does not exist yields an empty collection.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::cards::Card;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Reads and writes the card file under a base directory
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory (e.g. ~/.local/share/flashsprint)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashsprint"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Path of the card file
    pub fn cards_path(&self) -> PathBuf {
        self.base_path.join("cards.json")
    }

    /// Load all card records; a missing file is an empty collection
    pub fn load(&self) -> Result<Vec<Card>> {
        let path = self.cards_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;
        Ok(cards)
    }

    /// Write all card records, creating the directory if needed
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.cards_path(), serde_json::to_string_pretty(cards)?)?;
        Ok(())
    }
}
