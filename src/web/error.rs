use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use crate::error::Error;

/// Error type for HTTP handlers.
///
/// Wraps the crate [`Error`] and maps it onto status codes. Upstream failure
/// details are logged but never leaked to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Domain(error) = self;
        let (status, message) = match &error {
            Error::Parameter(message) => {
                (StatusCode::BAD_REQUEST, (*message).to_string())
            },
            Error::NotFound(message) => {
                (StatusCode::NOT_FOUND, message.clone())
            },
            _ if error.is_timeout() => {
                log::warn!("upstream request timed out: {}", error);
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    String::from("Steam took too long to respond"),
                )
            },
            other => {
                log::error!("request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Failed to fetch data from Steam"),
                )
            },
        };
        let body = json!({
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_are_bad_requests() {
        let response = ApiError::from(Error::Parameter("Steam ID required")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_errors_are_404s() {
        let response = ApiError::from(Error::NotFound("Steam ID not found".into()))
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_errors_become_opaque_500s() {
        let response = ApiError::from(Error::Response("playerstats went missing".into()))
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
