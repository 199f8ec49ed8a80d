//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bitrix_client::BitrixClient;
use gemini_client::GeminiClient;
use resend_client::ResendClient;

use crate::config::Config;
use crate::kernel::{BitrixAdapter, GeminiAdapter, ResendAdapter, ServerDeps};
use crate::server::routes::{health_handler, submit_lead_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Wire the production collaborators from configuration.
pub fn build_deps(config: &Config) -> Arc<ServerDeps> {
    let gemini = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    let bitrix = Arc::new(BitrixClient::new(config.bitrix_webhook_url.clone()));
    let resend = Arc::new(ResendClient::new(config.resend_api_key.clone()));

    Arc::new(ServerDeps::new(
        Arc::new(GeminiAdapter::new(gemini)),
        Arc::new(BitrixAdapter::new(bitrix)),
        Arc::new(ResendAdapter::new(resend, config.email_from.clone())),
    ))
}

/// Build the Axum application router.
///
/// Collaborators come in through `ServerDeps` so tests inject mocks here.
pub fn build_app(server_deps: Arc<ServerDeps>) -> Router {
    let app_state = AxumAppState { server_deps };

    // CORS configuration - the quiz frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/lead", post(submit_lead_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
