//! HTTP API for the account service: configuration, routing, middleware and
//! server lifecycle.

pub mod app;
pub mod config;
pub mod middleware;
pub mod server;

pub use app::build_app;
pub use config::ApiConfig;
