use serde::{Deserialize, Serialize};

use crate::model::{leaderboard::ImportEntry, structures::player::Player};

#[derive(Deserialize, Debug)]
pub struct AddPlayerRequest {
    pub name: String,
    pub rank: Option<String>,
    pub stars: Option<f64>,
    #[serde(default)]
    pub roblox_link: String,
    pub position: Option<u32>
}

#[derive(Deserialize, Debug)]
pub struct UpdatePlayerRequest {
    /// Defaults to the name in the request path when omitted.
    pub new_name: Option<String>,
    pub rank: Option<String>,
    pub stars: Option<f64>,
    #[serde(default)]
    pub roblox_link: String,
    pub position: Option<u32>
}

#[derive(Deserialize, Debug)]
pub struct SwapRequest {
    pub name1: String,
    pub name2: String
}

#[derive(Deserialize, Debug)]
pub struct ImportRequest {
    #[serde(default)]
    pub players: Vec<ImportEntry>
}

#[derive(Serialize, Debug)]
pub struct PlayersResponse {
    pub success: bool,
    pub players: Vec<Player>
}

impl PlayersResponse {
    pub fn new(players: Vec<Player>) -> PlayersResponse {
        PlayersResponse {
            success: true,
            players
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GradesResponse {
    pub success: bool,
    pub grades: Vec<String>
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String
}
