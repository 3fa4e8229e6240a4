use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use prompt_gallery::{
    app::envy::Envy, app_router, images::apis::replicate::service::ReplicateService, AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    let generator = ReplicateService::new(
        &envy.replicate_api_key,
        Duration::from_millis(envy.poll_interval_ms()),
    );

    tracing::info!(
        "generating {} image(s) per prompt ({})",
        envy.image_count(),
        envy.app_env
    );

    let state = AppState {
        envy: Arc::new(envy),
        generator: Arc::new(generator),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app_router(state).into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}
