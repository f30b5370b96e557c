//! SuperHero API server: reads config from env (`.env` honoured), builds the store,
//! serves the routes.

use std::sync::Arc;

use superhero_api::{app_router, AppConfig, AppState, HeroService, PgHeroStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("superhero_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = PgHeroStore::connect(&config.database)?;
    let state = AppState {
        heroes: HeroService::new(Arc::new(store)),
    };
    let app = app_router(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
