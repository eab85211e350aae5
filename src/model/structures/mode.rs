use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Leaderboard mode. Each mode is scored from its own grade table and
/// persisted to its own file.
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Classic,
    Ffa
}
