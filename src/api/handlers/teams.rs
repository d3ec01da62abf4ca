use axum::{Json, extract::State};
use std::sync::Arc;

use super::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::services::standings::load_standings;
use crate::standings::StandingsRow;

pub const TEAMS_ERROR: &str = "Failed to fetch teams";

/// League table computed from every team and every scored match
pub async fn get_teams(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<StandingsRow>>> {
    let rows = load_standings(state.store.as_ref())
        .map_err(|e| ApiError::store_unavailable(TEAMS_ERROR, e))?;

    log::debug!("Serving standings for {} teams", rows.len());
    Ok(Json(rows))
}
