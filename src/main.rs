//! News sentiment service, binary entrypoint.
//! Boots the Axum HTTP server on Shuttle with the analyzer routes.

use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    news_sentiment_analyzer::telemetry::init_dev_tracing();

    let router = news_sentiment_analyzer::app().await?;
    Ok(router.into())
}
