use std::{env, fs, path::PathBuf};

use utg_leaderboard::{
    api::{AppState, ModeState},
    model::structures::mode::Mode
};

/// Fresh scratch directory under the system temp dir, unique per test
/// name so parallel tests never share files.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = env::temp_dir().join("utg-leaderboard-tests").join(test);
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("Expected to clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("Expected to create scratch dir");

    dir
}

/// App state over empty classic and ffa boards persisted in `dir`.
pub fn app_state(dir: &PathBuf) -> AppState {
    let classic = ModeState::load(dir, Mode::Classic).expect("Expected classic board to load");
    let ffa = ModeState::load(dir, Mode::Ffa).expect("Expected ffa board to load");

    AppState::new(classic, ffa)
}
