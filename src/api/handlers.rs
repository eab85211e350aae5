use axum::{
    extract::{Path, State},
    Json
};
use tracing::info;

use crate::{
    api::{
        api_structs::{
            AddPlayerRequest, GradesResponse, ImportRequest, PlayersResponse, SwapRequest, UpdatePlayerRequest
        },
        error::ApiError,
        state::AppState
    },
    model::{scoring::RawGrade, structures::mode::Mode}
};

fn parse_mode(raw: &str) -> Result<Mode, ApiError> {
    raw.parse::<Mode>()
        .map_err(|_| ApiError::not_found(format!("unknown leaderboard mode: {raw}")))
}

fn validate_position(position: Option<u32>) -> Result<(), ApiError> {
    match position {
        Some(0) => Err(ApiError::bad_request("position must be at least 1")),
        _ => Ok(())
    }
}

pub async fn get_players(
    State(state): State<AppState>,
    Path(mode): Path<String>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;
    let guard = state.for_mode(mode).lock().await;

    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn add_player(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(req): Json<AddPlayerRequest>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    validate_position(req.position)?;

    let grade = RawGrade {
        rank: req.rank,
        stars: req.stars
    };

    let mut guard = state.for_mode(mode).lock().await;
    guard
        .leaderboard
        .insert(req.name.clone(), &grade, req.roblox_link, req.position)?;
    guard.save()?;

    info!(mode = %mode, name = %req.name, position = ?req.position, "player added");
    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn update_player(
    State(state): State<AppState>,
    Path((mode, old_name)): Path<(String, String)>,
    Json(req): Json<UpdatePlayerRequest>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;
    validate_position(req.position)?;

    let new_name = req.new_name.unwrap_or_else(|| old_name.clone());
    if new_name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }

    let grade = RawGrade {
        rank: req.rank,
        stars: req.stars
    };

    let mut guard = state.for_mode(mode).lock().await;
    guard
        .leaderboard
        .update(&old_name, new_name, &grade, req.roblox_link, req.position)?;
    guard.save()?;

    info!(mode = %mode, name = %old_name, "player updated");
    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn remove_player(
    State(state): State<AppState>,
    Path((mode, name)): Path<(String, String)>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;

    let mut guard = state.for_mode(mode).lock().await;
    guard.leaderboard.remove(&name);
    guard.save()?;

    info!(mode = %mode, name = %name, "player removed");
    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn delete_all_players(
    State(state): State<AppState>,
    Path(mode): Path<String>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;

    let mut guard = state.for_mode(mode).lock().await;
    guard.leaderboard.clear();
    guard.save()?;

    info!(mode = %mode, "leaderboard cleared");
    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn swap_players(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(req): Json<SwapRequest>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;

    let mut guard = state.for_mode(mode).lock().await;
    guard.leaderboard.swap(&req.name1, &req.name2)?;
    guard.save()?;

    info!(mode = %mode, name1 = %req.name1, name2 = %req.name2, "positions swapped");
    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn import_players(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(req): Json<ImportRequest>
) -> Result<Json<PlayersResponse>, ApiError> {
    let mode = parse_mode(&mode)?;
    if req.players.is_empty() {
        return Err(ApiError::bad_request("no players provided"));
    }

    let submitted = req.players.len();
    let mut guard = state.for_mode(mode).lock().await;
    guard.leaderboard.import(req.players);
    guard.save()?;

    info!(
        mode = %mode,
        submitted,
        imported = guard.leaderboard.len(),
        "leaderboard imported"
    );
    Ok(Json(PlayersResponse::new(guard.leaderboard.ordered())))
}

pub async fn get_grades(
    State(state): State<AppState>,
    Path(mode): Path<String>
) -> Result<Json<GradesResponse>, ApiError> {
    let mode = parse_mode(&mode)?;
    let guard = state.for_mode(mode).lock().await;

    Ok(Json(GradesResponse {
        success: true,
        grades: guard.leaderboard.scoring().grades()
    }))
}
