use axum::{http::Uri, Json};

use account_core::AppError;

use crate::app::dto::MessageResponse;
use crate::app::errors::ApiError;

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("hello"))
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found("route", uri.path()).into()
}
