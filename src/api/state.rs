use std::{path::Path, sync::Arc};

use tokio::sync::Mutex;
use tracing::info;

use crate::{
    model::{leaderboard::Leaderboard, structures::mode::Mode},
    store::{PlayerStore, StoreError}
};

/// One leaderboard plus its backing store. Every operation reads then
/// rewrites the full in-memory sequence, so each mode is guarded by a
/// single mutex and the save happens under the same lock as the
/// mutation.
pub struct ModeState {
    pub leaderboard: Leaderboard,
    store: PlayerStore
}

impl ModeState {
    /// Opens the mode's store and loads whatever it currently holds.
    pub fn load(data_dir: &Path, mode: Mode) -> Result<ModeState, StoreError> {
        let store = PlayerStore::new(data_dir, mode);
        let players = store.load()?;

        info!(mode = %mode, players = players.len(), "leaderboard loaded");
        Ok(ModeState {
            leaderboard: Leaderboard::with_players(mode, players),
            store
        })
    }

    /// Persists the current sequence. Called after every successful
    /// mutation, before the lock is released.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(self.leaderboard.players())
    }
}

/// Shared handler state: one mutex-guarded [`ModeState`] per mode,
/// constructed and owned by the caller.
#[derive(Clone)]
pub struct AppState {
    classic: Arc<Mutex<ModeState>>,
    ffa: Arc<Mutex<ModeState>>
}

impl AppState {
    pub fn new(classic: ModeState, ffa: ModeState) -> AppState {
        AppState {
            classic: Arc::new(Mutex::new(classic)),
            ffa: Arc::new(Mutex::new(ffa))
        }
    }

    pub fn for_mode(&self, mode: Mode) -> &Arc<Mutex<ModeState>> {
        match mode {
            Mode::Classic => &self.classic,
            Mode::Ffa => &self.ffa
        }
    }
}
