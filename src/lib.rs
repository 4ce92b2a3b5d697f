// Library crate for the construction stages API
// Exports modules for use by the server binary and tests

pub mod config;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dispatch::dispatch;
use crate::state::AppState;

/// Build the application router with the given state.
///
/// Every request goes through the hand-rolled route table in [`dispatch`];
/// unmatched requests get `{"error": "No such route"}`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
