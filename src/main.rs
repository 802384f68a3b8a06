use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use menu_core::{CoreConfig, constants::DEFAULT_REST_ADDR, open_store};

/// Main entry point for the menu backend
///
/// Opens the document store once, then serves the REST API until interrupted.
///
/// # Environment Variables
/// - `MENU_REST_ADDR`: REST server address (default: "0.0.0.0:3003")
/// - `MENU_MONGO_URI`: MongoDB connection string (default: "mongodb://localhost:27017/")
/// - `MENU_DB_NAME`: Database name (default: "menu")
/// - `MENU_MAX_POOL_SIZE`: Maximum pooled store connections (default: 10)
/// - `MENU_STORE`: `mongo` (default) or `memory`
///
/// # Errors
/// Returns an error if:
/// - the configuration is invalid,
/// - the document store cannot be reached,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("menu_run=info".parse()?)
                .add_directive("menu_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("MENU_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let cfg = CoreConfig::from_env()?;

    tracing::info!("++ Starting menu REST on {}", rest_addr);
    tracing::info!("++ Using {:?} store", cfg.store_backend());

    let store = open_store(&cfg).await?;
    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Menu REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
