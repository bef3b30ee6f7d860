use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use photosite::config::AppConfig;
use photosite::routes;
use photosite::services::delivery::DeliveryChain;
use photosite::services::mail::resend::ResendProvider;
use photosite::services::mail::EmailProvider;
use photosite::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.resend_api_key.is_empty() {
        tracing::warn!("RESEND_API_KEY is not set; the booking relay will fail every send");
    }
    let mailer: Arc<dyn EmailProvider> = Arc::new(ResendProvider::new(
        config.resend_api_key.clone(),
        config.resend_api_url.clone(),
    ));
    let delivery = DeliveryChain::from_config(&config, Arc::clone(&mailer))?;

    let state = Arc::new(AppState {
        config: config.clone(),
        mailer,
        delivery,
    });

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(lang = config.default_language.code(), "starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
