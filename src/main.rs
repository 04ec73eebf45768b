use anyhow::Context;

use yoyo_academy::config::AppConfig;
use yoyo_academy::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    eprintln!("🪀 YoYo Academy v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Listening: http://{}", config.bind_addr);
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!(
        "   Hydrate timeout: {}ms, gate budget: {}ms",
        config.hydrate_timeout.as_millis(),
        config.gate_render_budget.as_millis()
    );

    let bind_addr = config.bind_addr.clone();
    let state = AppState::from_config(config)
        .await
        .context("failed to initialise application state")?;
    eprintln!(
        "   Content: {} tricks, {} paths\n",
        state.catalog.tricks().len(),
        state.catalog.paths().len()
    );

    // ── HTTP ─────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, "YoYo Academy server started");
    axum::serve(listener, web::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
