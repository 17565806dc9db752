use crate::model::app_state::AppState;
use crate::model::errors::ServerError;
use crate::model::game::Game;
use crate::shared::aggregator::{run_all, run_game_cached};
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const ALL_GAMES_PATH: &str = "/api/all";

pub async fn get_index() -> Response {
    let endpoints = Game::ALL
        .into_iter()
        .map(Game::path)
        .chain(std::iter::once(ALL_GAMES_PATH))
        .collect::<Vec<_>>();
    (
        StatusCode::OK,
        Json(json!({ "ok": true, "endpoints": endpoints })),
    )
        .into_response()
}

pub async fn get_powerball(State(state): State<AppState>) -> Response {
    get_game(state, Game::Powerball).await
}

pub async fn get_mega_millions(State(state): State<AppState>) -> Response {
    get_game(state, Game::MegaMillions).await
}

pub async fn get_cash4life(State(state): State<AppState>) -> Response {
    get_game(state, Game::Cash4Life).await
}

pub async fn get_fantasy5(State(state): State<AppState>) -> Response {
    get_game(state, Game::Fantasy5).await
}

pub async fn get_cash3(State(state): State<AppState>) -> Response {
    get_game(state, Game::Cash3).await
}

pub async fn get_cash4(State(state): State<AppState>) -> Response {
    get_game(state, Game::Cash4).await
}

/// Every game at once. Individual failures are reported inside the body, so
/// the response itself is always 200.
pub async fn get_all_games(State(state): State<AppState>) -> Response {
    let reports = run_all(state.fetcher.clone(), state.cache.as_deref()).await;
    (StatusCode::OK, Json(reports)).into_response()
}

pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ServerError::not_found(uri.path())),
    )
        .into_response()
}

async fn get_game(state: AppState, game: Game) -> Response {
    let report = run_game_cached(state.fetcher.clone(), state.cache.as_deref(), game).await;
    let status = if report.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(report)).into_response()
}
