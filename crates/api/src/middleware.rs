use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};

use account_core::AppError;

use crate::app::errors::ApiError;

#[derive(Debug, Clone, Copy)]
pub struct PayloadLimit {
    pub max_body_bytes: u64,
}

/// Reject requests that declare a body larger than the configured limit.
///
/// Only the `Content-Length` header is checked; a chunked body is not counted.
pub async fn payload_limit(
    State(limit): State<PayloadLimit>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(len) = content_length(req.headers()) {
        if len > limit.max_body_bytes {
            return Err(AppError::payload_too_large(limit.max_body_bytes, len).into());
        }
    }

    Ok(next.run(req).await)
}

/// Log method, path, status and latency of every request.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "request"
    );

    response
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
