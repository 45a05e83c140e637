use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::types::{AddPlayerRequest, GameResponse, RoundResponse};
use crate::game::{GameSession, Hand, HandInfo, Round};
use crate::shared::{AppError, AppState};

/// GET /game
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(State(state): State<AppState>) -> Json<GameResponse> {
    Json(state.game_service.snapshot().await.into())
}

/// POST /players
#[instrument(name = "add_player", skip(state))]
pub async fn add_player(
    State(state): State<AppState>,
    Json(request): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    let session = state.game_service.add_player(&request.name).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// DELETE /players/:index
#[instrument(name = "remove_player", skip(state))]
pub async fn remove_player(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<GameResponse>, AppError> {
    let session = state.game_service.remove_player(index).await?;
    Ok(Json(session.into()))
}

/// POST /rounds
#[instrument(name = "add_round", skip(state, round))]
pub async fn add_round(
    State(state): State<AppState>,
    Json(round): Json<Round>,
) -> Result<(StatusCode, Json<RoundResponse>), AppError> {
    let result = state.game_service.add_round(round).await?;
    Ok((
        StatusCode::CREATED,
        Json(RoundResponse {
            game: result.session.into(),
            notices: result.notices,
        }),
    ))
}

/// DELETE /rounds/:index
#[instrument(name = "remove_round", skip(state))]
pub async fn remove_round(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<GameResponse>, AppError> {
    let session = state.game_service.remove_round(index).await?;
    Ok(Json(session.into()))
}

/// POST /game/reset-rounds
#[instrument(name = "reset_rounds", skip(state))]
pub async fn reset_rounds(State(state): State<AppState>) -> Result<Json<GameResponse>, AppError> {
    info!("Resetting rounds");
    let session = state.game_service.reset_rounds().await?;
    Ok(Json(session.into()))
}

/// POST /game/reset
#[instrument(name = "reset_all", skip(state))]
pub async fn reset_all(State(state): State<AppState>) -> Result<Json<GameResponse>, AppError> {
    info!("Resetting game");
    let session = state.game_service.reset_all().await?;
    Ok(Json(session.into()))
}

/// GET /hands
pub async fn list_hands() -> Json<Vec<HandInfo>> {
    Json(Hand::catalog())
}

/// GET /archive
#[instrument(name = "list_archive", skip(state))]
pub async fn list_archive(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameSession>>, AppError> {
    Ok(Json(state.game_service.archived_sessions().await?))
}
