mod model;
mod server;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    carrier::CarrierClient,
    config::Config,
    error::AppError,
    middleware::auth::JwtKeys,
    router,
    startup,
    state::AppState,
    storage::HttpObjectStorage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client();

    let storage = Arc::new(HttpObjectStorage::new(
        http_client.clone(),
        url::Url::parse(&config.storage_base_url)
            .map_err(|e| AppError::InternalError(format!("Invalid STORAGE_BASE_URL: {e}")))?,
        url::Url::parse(&config.storage_public_url)
            .map_err(|e| AppError::InternalError(format!("Invalid STORAGE_PUBLIC_URL: {e}")))?,
    ));

    let carrier = CarrierClient::new(
        http_client,
        url::Url::parse(&config.carrier_base_url)
            .map_err(|e| AppError::InternalError(format!("Invalid CARRIER_BASE_URL: {e}")))?,
        config.carrier_token.clone(),
        config.carrier_shop_id,
    );

    let jwt = JwtKeys::new(&config.jwt_secret, config.jwt_ttl_seconds);

    let state = AppState::new(db, storage, carrier, jwt);

    let app = router::router()
        .with_state(state)
        .merge(router::swagger())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
