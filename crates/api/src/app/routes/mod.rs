use axum::{
    routing::{get, post},
    Router,
};

pub mod account;
pub mod system;

/// Router for the account endpoints (mounted under the configured prefix).
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::hello))
        .route("/me", get(account::me))
        .route("/signup", post(account::signup))
        .route("/signin", post(account::signin))
        .route("/signout", post(account::signout))
        .route("/tokens", post(account::tokens))
        .route("/image", post(account::image).delete(account::delete_image))
        .route("/details", get(account::details))
}
