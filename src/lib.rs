// Library crate for the deployment dashboard backend
// Exports modules for use by the binaries and tests

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod telemetry;

use axum::{
    routing::{get, patch},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{
    create_configuration, create_deployment, get_configuration, get_deployment, get_stats, health,
    list_configurations, list_deployments, update_configuration, update_deployment_status,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Deployment routes
        .route(
            "/api/deployments",
            get(list_deployments).post(create_deployment),
        )
        .route("/api/deployments/{id}", get(get_deployment))
        .route(
            "/api/deployments/{id}/status",
            patch(update_deployment_status),
        )
        // Configuration routes; GET looks up by name, PATCH by id
        .route(
            "/api/configurations",
            get(list_configurations).post(create_configuration),
        )
        .route(
            "/api/configurations/{key}",
            get(get_configuration).patch(update_configuration),
        )
        // Dashboard stats
        .route("/api/stats", get(get_stats));

    let cors = if state.config.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(|| async { "Deploy dashboard API" }))
        .route("/health", get(health))
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
