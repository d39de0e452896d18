use crate::app_state::AppState;
use crate::health_response::HealthResponse;
use axum::{extract::State, Json};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        model: state.model.clone(),
    })
}
