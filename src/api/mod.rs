// JSON surface over the game service

pub use handlers::{
    add_player, add_round, get_game, list_archive, list_hands, remove_player, remove_round,
    reset_all, reset_rounds,
};
pub use types::{AddPlayerRequest, GameResponse, RoundResponse};

mod handlers;
mod types;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::shared::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", get(get_game))
        .route("/game/reset-rounds", post(reset_rounds))
        .route("/game/reset", post(reset_all))
        .route("/players", post(add_player))
        .route("/players/:index", delete(remove_player))
        .route("/rounds", post(add_round))
        .route("/rounds/:index", delete(remove_round))
        .route("/hands", get(list_hands))
        .route("/archive", get(list_archive))
        .with_state(state)
}
