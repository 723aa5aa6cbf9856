//! Route definitions for the API server

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // CORS open to any origin so a separately hosted frontend can query
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Control metadata: dropdown options and slider bounds
        .route("/sites", get(handlers::list_sites))
        .route("/payload-bounds", get(handlers::payload_bounds))
        // Chart queries
        .route("/charts/outcomes", get(handlers::get_outcomes))
        .route("/charts/correlation", get(handlers::get_correlation))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
