use tokio::signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use deploy_dashboard::config::Config;
use deploy_dashboard::handlers::{
    ConfigurationResponse, CreateConfigurationRequest, CreateDeploymentRequest, DeployerResponse,
    DeploymentDetailResponse, DeploymentResponse, HealthResponse, StatsResponse,
    UpdateConfigurationRequest, UpdateDeploymentStatusRequest,
};
use deploy_dashboard::state::AppState;
use deploy_dashboard::telemetry::init_tracing;
use deploy_dashboard::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::deployment::list_deployments,
        handlers::deployment::get_deployment,
        handlers::deployment::create_deployment,
        handlers::deployment::update_deployment_status,
        handlers::configuration::list_configurations,
        handlers::configuration::get_configuration,
        handlers::configuration::create_configuration,
        handlers::configuration::update_configuration,
        handlers::stats::get_stats,
    ),
    components(schemas(
        HealthResponse,
        CreateDeploymentRequest,
        UpdateDeploymentStatusRequest,
        DeploymentResponse,
        DeploymentDetailResponse,
        DeployerResponse,
        CreateConfigurationRequest,
        UpdateConfigurationRequest,
        ConfigurationResponse,
        StatsResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Deployments", description = "Deployment history and status"),
        (name = "Configurations", description = "Stored server and build configuration snippets"),
        (name = "Stats", description = "Dashboard summary figures")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing
    init_tracing(config.log_format, "info,tower_http=debug");

    let addr = config.server_addr();

    // Initialize application state (in-memory store, seeded unless disabled)
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!(seeded = state.config.seed_data, "Storage initialized");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
