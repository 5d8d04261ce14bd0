//! Domain-error to HTTP response translation

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use deskhub_domain::DeskHubError;
use serde_json::json;
use tracing::warn;

/// Wrapper making [`DeskHubError`] usable as an axum rejection.
#[derive(Debug)]
pub struct ApiError(pub DeskHubError);

impl From<DeskHubError> for ApiError {
    fn from(value: DeskHubError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DeskHubError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DeskHubError::Auth(_) => StatusCode::UNAUTHORIZED,
            DeskHubError::NotFound(_) => StatusCode::NOT_FOUND,
            DeskHubError::Network(_) => StatusCode::BAD_GATEWAY,
            DeskHubError::Config(_) | DeskHubError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            warn!(error = %self.0, "request failed");
        }

        (status, Json(json!({"error": self.0.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_statuses() {
        let cases = [
            (DeskHubError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (DeskHubError::Auth("x".into()), StatusCode::UNAUTHORIZED),
            (DeskHubError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (DeskHubError::Network("x".into()), StatusCode::BAD_GATEWAY),
            (DeskHubError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let response = ApiError(error).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
