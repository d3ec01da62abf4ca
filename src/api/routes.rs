use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    health::get_health,
    matches::get_matches,
    pages::{get_matches_page, get_standings_page},
    teams::get_teams,
};
use crate::render::html::{MATCHES_PATH, STANDINGS_PATH};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/healthz", get(get_health))
        .route("/api/matches", get(get_matches))
        .route("/api/teams", get(get_teams))
        .route("/", get(get_matches_page))
        .route(MATCHES_PATH, get(get_matches_page))
        .route(STANDINGS_PATH, get(get_standings_page))
        .with_state(state)
}
