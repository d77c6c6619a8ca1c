//! # focus_api
//!
//! HTTP API library for Focus Coach.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use focus_core::ResponseSelector;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::chat;

/// Route paths.
pub mod routes {
    pub const POST_API_CHAT: &str = "/api/chat";
}

/// Shared application state passed to all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Response selector shared by every chat request.
    pub selector: Arc<ResponseSelector>,
}

impl AppState {
    /// State with the default (randomised) response selector.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            selector: Arc::new(ResponseSelector::default()),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .layer(cors)
        .with_state(state)
}
