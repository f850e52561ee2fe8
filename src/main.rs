use std::sync::Arc;

use quotesmith::api::{QuoteService, ServiceState};
use quotesmith::config::AppConfig;
use quotesmith::core::llm::GeminiClient;
use quotesmith::core::orchestrator::{BackgroundOrchestrator, Orchestrator};
use quotesmith::core::photos::{ImageSearch, PexelsClient, UnsplashClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _log_guard = quotesmith::core::logging::init();
    log::info!("Quotesmith v{} starting", quotesmith::VERSION);

    let config = AppConfig::load();

    let gemini_key = config.credentials.gemini_api_key.clone();
    if gemini_key.trim().is_empty() {
        log::warn!("No Gemini API key configured; feature routes will serve generated content");
    } else if !GeminiClient::is_valid_api_key_format(&gemini_key) {
        log::warn!("Gemini API key does not look like a Google API key (expected AIza prefix)");
    }
    let model = GeminiClient::new(gemini_key, config.model.name.clone());
    log::info!("Generative model: {}", config.model.name);

    let unsplash: Option<Arc<dyn ImageSearch>> =
        if config.credentials.unsplash_access_key.trim().is_empty() {
            None
        } else {
            Some(Arc::new(UnsplashClient::new(
                config.credentials.unsplash_access_key.clone(),
            )))
        };
    let pexels: Option<Arc<dyn ImageSearch>> =
        if config.credentials.pexels_api_key.trim().is_empty() {
            None
        } else {
            Some(Arc::new(PexelsClient::new(
                config.credentials.pexels_api_key.clone(),
            )))
        };
    log::info!(
        "Background providers: unsplash={}, pexels={}",
        unsplash.is_some(),
        pexels.is_some()
    );

    let state = ServiceState::new(
        Orchestrator::new(Arc::new(model)),
        BackgroundOrchestrator::new(unsplash, pexels),
    );

    let mut service = QuoteService::new(config.bind_addr(), state);
    service
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("failed to start service: {e}"))?;

    tokio::signal::ctrl_c().await?;
    log::info!("Shutdown signal received");
    service.stop().await;

    Ok(())
}
