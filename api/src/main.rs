use anyhow::{Context, Result};
use api::AppState;
use chat_relay::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().context("invalid configuration")?;
    if !config.has_api_key() {
        log::warn!("OPENAI_API_KEY is not set, every /chat call will fail");
    }
    log::info!("Price list uploads go to {}", config.upload_dir.display());

    let state = AppState::from_config(&config).context("failed to build completion client")?;
    let app = api::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
