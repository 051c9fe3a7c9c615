//! Account handlers.
//!
//! None of these read the request yet; each answers 200 with a fixed body.

use axum::Json;

use crate::app::dto::MessageResponse;

/// Profile of the calling user.
pub async fn me() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's me!"))
}

pub async fn signup() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's signup!"))
}

pub async fn signin() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's signin!"))
}

pub async fn signout() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's signout!"))
}

/// Token refresh.
pub async fn tokens() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's tokens!"))
}

/// Profile image upload.
pub async fn image() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's image!"))
}

pub async fn delete_image() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's delete image!"))
}

/// Profile details update.
pub async fn details() -> Json<MessageResponse> {
    Json(MessageResponse::new("It's details!"))
}
