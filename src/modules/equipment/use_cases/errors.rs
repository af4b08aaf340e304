use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::equipment::adapters::outbound::equipment_store::StoreError;
use crate::modules::equipment::core::records::EquipmentId;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Equipment {equipment_id} not found")]
    NotFound { equipment_id: EquipmentId },

    #[error(transparent)]
    Upstream(#[from] StoreError),

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
