use axum::Json;

use crate::api::models::HealthResponse;

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
