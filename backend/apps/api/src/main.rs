//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia::{TriviaConfig, store::TriviaStore, trivia_router};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,trivia=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to database"
    );

    let store = TriviaStore::new(pool);

    // Startup check; errors here should not prevent server startup
    match store.counts().await {
        Ok((categories, questions)) => {
            tracing::info!(categories, questions, "Trivia store ready");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Trivia store check failed, continuing anyway"
            );
        }
    }

    // Build router
    let app = Router::new()
        .merge(trivia_router(store, TriviaConfig::default()))
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer());

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
