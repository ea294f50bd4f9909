use grocery_api::{AppState, build_router, database, load_config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = load_config()?;
    tracing::info!("loaded configuration:\n{}", config);

    // Fail fast if the store is unreachable rather than serve degraded.
    let pool = database::connect(&config.database).await?;
    database::ensure_schema(&pool).await?;
    tracing::info!(path = %config.database.path, "database connection successful");

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "grocery management api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
