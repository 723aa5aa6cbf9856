//! Error types for the REST API server

use crate::query::QueryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Launch site not found in the dataset
    UnknownSite(String),
    /// Invalid parameter in request
    InvalidParameter(String),
    /// Invalid payload range
    InvalidRange(String),
    /// Internal server error
    InternalError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::UnknownSite(site) => write!(f, "Unknown launch site: {}", site),
            ApiError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ApiError::InvalidRange(msg) => write!(f, "Invalid payload range: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::UnknownSite(site) => (
                StatusCode::NOT_FOUND,
                "UnknownSite",
                format!("Launch site '{}' not found in dataset", site),
            ),
            ApiError::InvalidParameter(msg) => (
                StatusCode::BAD_REQUEST,
                "InvalidParameter",
                msg.clone(),
            ),
            ApiError::InvalidRange(msg) => (
                StatusCode::BAD_REQUEST,
                "InvalidRange",
                msg.clone(),
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                msg.clone(),
            ),
        };

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

// Conversions from other error types

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::UnknownSite(site) => ApiError::UnknownSite(site),
            QueryError::InvalidRange { low, high } => ApiError::InvalidRange(format!(
                "low bound {} exceeds high bound {}",
                low, high
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_unknown_site_maps_to_not_found() {
        let response = ApiError::UnknownSite("BOCA CHICA".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_range_maps_to_bad_request() {
        let err: ApiError = QueryError::InvalidRange {
            low: 5000.0,
            high: 100.0,
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_query_error_conversion_preserves_site() {
        let err: ApiError = QueryError::UnknownSite("VAFB SLC-4E".to_string()).into();
        assert!(matches!(err, ApiError::UnknownSite(site) if site == "VAFB SLC-4E"));
    }
}
