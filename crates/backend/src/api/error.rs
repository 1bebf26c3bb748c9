use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::refactor::ErrorDetail;

use crate::shared::llm::RefactorError;

/// Error that renders as the `{ "detail": ... }` JSON body the frontend
/// surfaces verbatim.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorDetail {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<RefactorError> for ApiError {
    fn from(err: RefactorError) -> Self {
        tracing::error!("refactoring failed: {}", err);
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_map_to_500_with_detail() {
        let api_err: ApiError = RefactorError::EmptyReply.into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.detail, "model returned an empty reply");
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorDetail {
            detail: "unsupported file type".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "unsupported file type" }));
    }
}
