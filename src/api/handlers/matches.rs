use axum::{Json, extract::State};
use std::sync::Arc;

use super::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::MatchRow;

pub const MATCHES_ERROR: &str = "Failed to fetch matches";

/// Every match with both team names, oldest first
pub async fn get_matches(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MatchRow>>> {
    let matches = state
        .store
        .list_matches()
        .map_err(|e| ApiError::store_unavailable(MATCHES_ERROR, e))?;

    log::debug!("Serving {} matches", matches.len());
    Ok(Json(matches))
}
