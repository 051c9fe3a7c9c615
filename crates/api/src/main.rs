use std::process::ExitCode;

use anyhow::Context;

use account_api::{config::ApiConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    account_observability::init();
    tracing::info!("account service started");

    let config = ApiConfig::from_env().context("failed to read configuration")?;

    // `report` logs the outcome; it is not returned as an error.
    let result = server::run(config).await;
    Ok(ExitCode::from(server::report(&result)))
}
