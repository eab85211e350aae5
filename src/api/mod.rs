pub mod api_structs;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, ModeState};

use axum::{
    routing::{delete, get, post, put},
    Router
};

/// Builds the API router over the shared leaderboard state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/players/{mode}",
            get(handlers::get_players).post(handlers::add_player)
        )
        .route("/api/players/{mode}/delete-all", delete(handlers::delete_all_players))
        .route("/api/players/{mode}/swap", post(handlers::swap_players))
        .route(
            "/api/players/{mode}/{name}",
            put(handlers::update_player).delete(handlers::remove_player)
        )
        .route("/api/leaderboards/{mode}/import", post(handlers::import_players))
        .route("/api/grades/{mode}", get(handlers::get_grades))
        .with_state(state)
}
