//! HTTP API application wiring (Axum router + middleware).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response bodies
//! - `errors.rs`: `AppError` to HTTP response mapping

use axum::{routing::get, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `server` and tests).
pub fn build_app(config: &ApiConfig) -> Router {
    let account = routes::router();

    // Nesting at the root is not allowed, so an empty prefix merges instead.
    let router = match config.route_prefix() {
        // The nested "/" route only matches `{prefix}`; `{prefix}/` is added by hand.
        Some(prefix) => Router::new()
            .route(&format!("{prefix}/"), get(routes::system::hello))
            .nest(&prefix, account),
        None => account,
    };

    let limit = middleware::PayloadLimit {
        max_body_bytes: config.max_body_bytes,
    };

    router.fallback(routes::system::not_found).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::log_request))
            .layer(axum::middleware::from_fn_with_state(
                limit,
                middleware::payload_limit,
            )),
    )
}
