//! Application setup: shared state, routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{get, post};
use lede_core::{Extractor, FetchConfig, Settings};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::routes::{health_handler, parse_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    pub fetch: Arc<FetchConfig>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { extractor: Arc::new(Extractor::with_config(settings.extract)), fetch: Arc::new(settings.fetch) }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "request",
            id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .route("/api/parse", post(parse_handler))
        .route("/health", get(health_handler))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(trace)
        .with_state(state)
}
