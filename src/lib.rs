pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod sinks;
pub mod state;
pub mod submission;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::sinks::chat::ChatSink;
use crate::sinks::email::EmailSink;
use crate::sinks::sheets::SheetsSink;
use crate::sinks::SinkRegistry;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    let timeout = Duration::from_secs(config.sink_timeout_secs);
    let max_body_size = config.max_body_size;

    let mut sinks = SinkRegistry::new();
    if let Some(sheets) = &config.sheets {
        sinks.register(Arc::new(SheetsSink::new(sheets.clone(), timeout)));
        tracing::info!("Spreadsheet sink configured");
    }
    if let Some(email) = &config.email {
        sinks.register(Arc::new(EmailSink::new(email.clone(), timeout)));
        tracing::info!("Email sink configured ({} recipients)", email.recipients.len());
    }
    if let Some(chat) = &config.chat {
        sinks.register(Arc::new(ChatSink::new(chat.clone(), timeout)));
        tracing::info!("Chat sink configured");
    }
    if sinks.is_empty() {
        tracing::warn!("No sinks configured; every submission will fail");
    }

    let state: SharedState = Arc::new(AppState { config, sinks });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .merge(routes::order_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
