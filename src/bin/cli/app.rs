use std::path::Path;

use anyhow::{Context, Result};

use flashsprint::review::ReviewEngine;
use flashsprint::scheduler::SchedulerKind;
use flashsprint::storage::FileStorage;

/// Shared application state for CLI commands
pub struct App {
    pub engine: ReviewEngine,
    storage: FileStorage,
}

impl App {
    /// Load the card file and build the engine with the chosen policy
    pub fn new(data_dir: Option<&Path>, kind: SchedulerKind) -> Result<Self> {
        let base_path = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => FileStorage::default_data_dir().context("Failed to get data directory")?,
        };
        let storage = FileStorage::new(base_path);

        let records = storage.load().context("Failed to load card file")?;
        let mut engine = ReviewEngine::new(kind);
        if !records.is_empty() {
            engine.import(records).context("Failed to restore cards")?;
        }

        Ok(Self { engine, storage })
    }

    /// Persist the engine's cards back to the card file
    pub fn save(&self) -> Result<()> {
        self.storage
            .save(&self.engine.export())
            .context("Failed to save card file")
    }
}
