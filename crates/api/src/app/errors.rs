//! Error responses for the account API.
//!
//! Every failure leaves a handler as `{"type": <kind>, "message": <message>}`
//! with the status chosen by [`account_core::status_of`].

use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use account_core::{AppError, find_app_error, status_of};

/// An [`AppError`] on its way out of a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Classify an arbitrary error.
    ///
    /// An `AppError` anywhere in the source chain is kept as is. Anything else
    /// is logged and replaced by [`AppError::internal`] so no detail leaks.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        match find_app_error(err) {
            Some(app) => Self(app.clone()),
            None => {
                tracing::error!(error = %err, "unclassified error");
                Self(AppError::internal())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        status_code(Some(&self.0))
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        let err: &(dyn StdError + 'static) = value.as_ref();
        Self::from_error(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.0)).into_response()
    }
}

/// [`status_of`] as an axum status code.
pub fn status_code(err: Option<&(dyn StdError + 'static)>) -> StatusCode {
    StatusCode::from_u16(status_of(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_core::ErrorKind;

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset by peer at 10.0.0.7")]
    struct Socket;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn app_error_becomes_typed_json() {
        let response = ApiError::from(AppError::conflict("user", "a@b.com")).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "type": "CONFLICT",
                "message": "resource: user already exists: a@b.com",
            })
        );
    }

    #[tokio::test]
    async fn foreign_error_is_folded_into_internal() {
        let response = ApiError::from_error(&Socket).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["type"], "INTERNAL");
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn anyhow_context_is_seen_through() {
        let err = anyhow::Error::from(AppError::authorization("token expired")).context("me");
        let api = ApiError::from(err);
        assert_eq!(api.0.kind(), ErrorKind::Authorization);
        assert_eq!(api.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn status_code_covers_every_kind() {
        let expected = [
            (AppError::authorization("x"), StatusCode::UNAUTHORIZED),
            (AppError::bad_request("x"), StatusCode::BAD_REQUEST),
            (AppError::conflict("x", "y"), StatusCode::CONFLICT),
            (AppError::internal(), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::not_found("x", "y"), StatusCode::NOT_FOUND),
            (AppError::payload_too_large(1, 2), StatusCode::PAYLOAD_TOO_LARGE),
        ];
        for (err, status) in expected {
            assert_eq!(status_code(Some(&err)), status);
        }
        assert_eq!(status_code(None), StatusCode::OK);
    }
}
