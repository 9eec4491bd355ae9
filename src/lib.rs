pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod models;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SharedStore;
use crate::state::{AppState, SharedState};

pub fn build_app(store: SharedStore, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState {
        schema: graphql::build_schema(store),
        config,
    });

    Router::new()
        .route(
            "/graphql",
            get(graphql::graphql_get).post(graphql::graphql_handler),
        )
        .route("/health", get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
