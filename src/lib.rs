use std::{any::Any, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    images::generator::ImageGenerator,
};

pub mod app;
pub mod gallery;
pub mod images;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub generator: Arc<dyn ImageGenerator>,
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/api/generate-image", post(images::controller::generate_image))
        .with_state(state)
        // layers
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("handler panicked: {}", detail);

    DefaultApiError::InternalServerError.value().into_response()
}
