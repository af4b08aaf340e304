use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.map_data.handle().await {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error.into_response(),
    }
}
