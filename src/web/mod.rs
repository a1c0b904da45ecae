//! HTTP surface for the comparison page.
//!
//! Routes mirror the frontend contract:
//!
//! ```text
//! POST /api/steam/resolve        -> resolve
//! GET  /api/steam/player         -> player
//! GET  /api/steam/summary        -> summary
//! GET  /api/steam/games          -> owned_games
//! GET  /api/steam/stats          -> badges
//! GET  /api/steam/recent         -> recently_played
//! GET  /api/steam/game-stats     -> game_stats
//! GET  /api/steam/{title}-stats  -> per-title stats
//! ```

mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use crate::manager::ProfileManager;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<ProfileManager>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/steam/resolve", post(handlers::resolve))
        .route("/api/steam/player", get(handlers::player))
        .route("/api/steam/summary", get(handlers::summary))
        .route("/api/steam/games", get(handlers::owned_games))
        .route("/api/steam/stats", get(handlers::badges))
        .route("/api/steam/recent", get(handlers::recently_played))
        .route("/api/steam/game-stats", get(handlers::game_stats))
        .route("/api/steam/cs2-stats", get(handlers::cs2_stats))
        .route("/api/steam/dota2-stats", get(handlers::dota2_stats))
        .route("/api/steam/tf2-stats", get(handlers::tf2_stats))
        .route("/api/steam/l4d2-stats", get(handlers::l4d2_stats))
        .route("/api/steam/portal2-stats", get(handlers::portal2_stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
