use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};

use crate::modules::equipment::core::records::EquipmentId;
use crate::modules::equipment::use_cases::date_range::DateRangeParams;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    equipment_id: Result<Path<EquipmentId>, PathRejection>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> impl IntoResponse {
    let Path(equipment_id) = match equipment_id {
        Ok(id) => id,
        Err(rejection) => {
            return ApplicationError::MalformedInput(rejection.body_text()).into_response();
        }
    };

    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => {
            return ApplicationError::MalformedInput(rejection.body_text()).into_response();
        }
    };

    match state.summary.handle(equipment_id, &params).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error.into_response(),
    }
}
