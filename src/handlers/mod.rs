pub mod common;
pub mod configuration;
pub mod deployment;
pub mod health;
pub mod stats;

pub use common::{require_field, validate_required};
pub use configuration::{
    create_configuration, get_configuration, list_configurations, update_configuration,
    ConfigurationListParams, ConfigurationResponse, CreateConfigurationRequest,
    UpdateConfigurationRequest,
};
pub use deployment::{
    create_deployment, get_deployment, list_deployments, update_deployment_status,
    CreateDeploymentRequest, DeployerResponse, DeploymentDetailResponse, DeploymentListParams,
    DeploymentResponse, UpdateDeploymentStatusRequest,
};
pub use health::{health, HealthResponse};
pub use stats::{get_stats, StatsResponse};
