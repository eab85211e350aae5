use std::{
    fs, io,
    path::{Path, PathBuf}
};

use thiserror::Error;
use tracing::debug;

use crate::model::structures::{mode::Mode, player::Player};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read or write leaderboard file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize leaderboard data: {0}")]
    Serialization(#[from] serde_json::Error)
}

/// Flat-file persistence for one leaderboard. The full player sequence
/// is rewritten on every save.
pub struct PlayerStore {
    path: PathBuf
}

impl PlayerStore {
    pub fn new(data_dir: &Path, mode: Mode) -> PlayerStore {
        PlayerStore {
            path: data_dir.join(format!("leaderboard_{mode}.json"))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted players. A missing file is an empty
    /// leaderboard, not an error.
    pub fn load(&self) -> Result<Vec<Player>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes the full player sequence. The data goes to a sibling temp
    /// file first and is renamed into place, so a crash mid-write leaves
    /// the previous file intact.
    pub fn save(&self, players: &[Player]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(players)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), count = players.len(), "leaderboard saved");
        Ok(())
    }
}
