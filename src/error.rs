use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

// The TMDB key travels in the query string, so the URL never leaves this process.
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::HttpClient(e.without_url())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_)
            | AppError::ExternalApi(_)
            | AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        let body = match &self {
            AppError::InvalidInput(msg) | AppError::NotFound(msg) | AppError::Configuration(msg) => {
                json!({ "error": msg })
            }
            AppError::ExternalApi(msg) => json!({
                "error": "Upstream provider request failed",
                "details": msg
            }),
            AppError::HttpClient(e) => json!({
                "error": "Upstream provider request failed",
                "details": e.to_string()
            }),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let err = AppError::InvalidInput("Please provide a mood description".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_configuration_errors_map_to_500() {
        let err = AppError::Configuration("TMDB_API_KEY not configured".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        let err = AppError::ExternalApi("TMDB returned status 503".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("movie 42".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
