// --- File: backend/src/main.rs ---

use anyhow::Context;
use backend::{
    config::AppConfig,
    web_server::{run_server, AppState},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Setup ---
    // 1. Initialize structured logging (RUST_LOG overrides the default level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 2. Load configuration: defaults, Config.toml, then APP_* variables
    let app_config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!("Configuration loaded: {:?}", app_config);

    // 3. Build the in-memory stores
    let app_state = AppState::in_memory(app_config);
    tracing::info!(
        "Stores ready: {} user(s), {} question(s)",
        app_state.users.count()?,
        app_state.questions.all()?.len()
    );

    // --- Run Server ---
    tracing::info!("Initializing server...");
    run_server(app_state).await
}
