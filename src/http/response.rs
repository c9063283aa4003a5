//! Response handling.
//!
//! Maps `AirdropError` to status codes and JSON error bodies:
//! validation failures are 400 without detail, upstream failures are 500
//! with the upstream error text as `detail`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::airdrop::AirdropError;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AirdropError {
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AirdropError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            detail: self.detail(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::BlockchainError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_has_no_detail() {
        let response = AirdropError::InvalidAddress.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Enter a valid recipient address." })
        );
    }

    #[tokio::test]
    async fn test_upstream_error_has_detail() {
        let response = AirdropError::UpstreamFailure(BlockchainError::Transport(
            "connection refused".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Internal Server Error", "detail": "connection refused" })
        );
    }
}
