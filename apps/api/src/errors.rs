use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::normalizer::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, raw_response) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }
            AppError::Analysis(e) => {
                let (status, code) = analysis_status(e);
                tracing::error!("Analysis error: {e}");
                (status, code, e.to_string(), e.raw_response().map(str::to_string))
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(raw) = raw_response {
            error["raw_response"] = json!(raw);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Maps each analysis failure to a status and a stable error code.
fn analysis_status(e: &AnalysisError) -> (StatusCode, &'static str) {
    match e {
        AnalysisError::MalformedResponse { .. } => (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE"),
        AnalysisError::SchemaViolation { .. } => (StatusCode::BAD_GATEWAY, "SCHEMA_VIOLATION"),
        AnalysisError::TypeCoercion { .. } => (StatusCode::BAD_GATEWAY, "TYPE_COERCION"),
        AnalysisError::Upstream(llm) if llm.is_auth_failure() => {
            (StatusCode::UNAUTHORIZED, "UPSTREAM_UNAUTHORIZED")
        }
        AnalysisError::Upstream(llm) if llm.is_timeout() => {
            (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT")
        }
        AnalysisError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let (status, body) = body_json(AppError::Validation("resume cannot be empty".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "resume cannot be empty");
        assert!(body["error"].get("raw_response").is_none());
    }

    #[tokio::test]
    async fn test_malformed_response_carries_raw_text() {
        let err = AnalysisError::MalformedResponse {
            raw: "no json here".to_string(),
        };
        let (status, body) = body_json(AppError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "MALFORMED_RESPONSE");
        assert_eq!(body["error"]["raw_response"], "no json here");
    }

    #[tokio::test]
    async fn test_schema_violation_names_missing_keys() {
        let err = AnalysisError::SchemaViolation {
            missing: vec!["match_percentage"],
            raw: "{}".to_string(),
        };
        let (status, body) = body_json(AppError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "SCHEMA_VIOLATION");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("match_percentage"));
    }

    #[tokio::test]
    async fn test_upstream_auth_failure_maps_to_401() {
        let err = AnalysisError::Upstream(LlmError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        });
        let (status, body) = body_json(AppError::from(err)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UPSTREAM_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_other_upstream_failure_maps_to_502() {
        let err = AnalysisError::Upstream(LlmError::EmptyContent);
        let (status, body) = body_json(AppError::from(err)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }
}
