use crate::middleware::cors::cors;
use crate::middleware::panic::internal_error;
use crate::model::app_state::AppState;
use crate::model::game::Game;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use draw_controller::*;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

pub mod draw_controller;

pub fn config_draw_controller(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route(Game::Powerball.path(), get(get_powerball))
        .route(Game::MegaMillions.path(), get(get_mega_millions))
        .route(Game::Cash4Life.path(), get(get_cash4life))
        .route(Game::Fantasy5.path(), get(get_fantasy5))
        .route(Game::Cash3.path(), get(get_cash3))
        .route(Game::Cash4.path(), get(get_cash4))
        .route(ALL_GAMES_PATH, get(get_all_games))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(from_fn_with_state(state.clone(), cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The full application; trailing slashes are ignored when routing.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(config_draw_controller(state))
}
