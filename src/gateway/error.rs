use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::gateway::TWIST_STATUS_HEADER;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(#[from] ScoringError),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_)
            | GatewayError::ScoringFailed(ScoringError::InvalidInput { .. }) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::ScoringFailed(ScoringError::EmbeddingUnavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            GatewayError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn twist_status(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_)
            | GatewayError::ScoringFailed(ScoringError::InvalidInput { .. }) => "invalid_request",
            GatewayError::ScoringFailed(ScoringError::EmbeddingUnavailable(_)) => {
                "embedding_unavailable"
            }
            GatewayError::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            TWIST_STATUS_HEADER,
            HeaderValue::from_static(self.twist_status()),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
