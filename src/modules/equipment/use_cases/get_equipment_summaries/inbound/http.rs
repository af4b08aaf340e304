use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::equipment::use_cases::date_range::DateRangeParams;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => {
            return ApplicationError::MalformedInput(rejection.body_text()).into_response();
        }
    };

    match state.summaries.handle(&params).await {
        Ok(summaries) => Json(summaries).into_response(),
        Err(error) => error.into_response(),
    }
}
