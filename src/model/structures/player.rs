use serde::{Deserialize, Serialize};

use crate::model::structures::grade::Grade;

/// One leaderboard entry. `points` and `percentage` are always derived
/// from `grade` by the scoring strategy, never set independently.
/// `position` is an optional 1-based pin; records without one are ranked
/// by score at display time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub grade: Grade,
    pub points: f64,
    pub percentage: f64,
    #[serde(default)]
    pub roblox_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>
}
