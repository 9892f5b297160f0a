use axum::{extract::State, http::StatusCode, Json};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::handlers::common::{require_field, validate_required, MAX_NAME_LENGTH};
use crate::models::{Deployment, NewDeployment, User};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeploymentListParams {
    /// Maximum number of deployments to return; 0 or absent returns all
    #[param(minimum = 0)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeploymentRequest {
    pub name: String,
    pub build_number: i32,
    pub status: String,
    pub environment: String,
    pub deployed_by: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDeploymentStatusRequest {
    pub status: Option<String>,
}

/// Deployment as stored, `deployedBy` is the user id
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResponse {
    pub id: i32,
    pub name: String,
    pub build_number: i32,
    pub status: String,
    pub environment: String,
    pub deployed_by: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub deployed_at: time::OffsetDateTime,
}

impl From<Deployment> for DeploymentResponse {
    fn from(d: Deployment) -> Self {
        Self {
            id: d.id,
            name: d.name,
            build_number: d.build_number,
            status: d.status,
            environment: d.environment,
            deployed_by: d.deployed_by,
            deployed_at: d.deployed_at,
        }
    }
}

/// Public view of the user who triggered a deployment
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeployerResponse {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl From<User> for DeployerResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            full_name: u.full_name,
        }
    }
}

/// Deployment with `deployedBy` expanded; omitted when the user is unknown
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDetailResponse {
    pub id: i32,
    pub name: String,
    pub build_number: i32,
    pub status: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_by: Option<DeployerResponse>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub deployed_at: time::OffsetDateTime,
}

impl DeploymentDetailResponse {
    fn new(d: Deployment, deployer: Option<User>) -> Self {
        Self {
            id: d.id,
            name: d.name,
            build_number: d.build_number,
            status: d.status,
            environment: d.environment,
            deployed_by: deployer.map(Into::into),
            deployed_at: d.deployed_at,
        }
    }
}

async fn with_deployer(state: &AppState, d: Deployment) -> AppResult<DeploymentDetailResponse> {
    let deployer = match d.deployed_by {
        Some(user_id) => state.storage.get_user(user_id).await?,
        None => None,
    };
    Ok(DeploymentDetailResponse::new(d, deployer))
}

// ============ Handlers ============

/// List deployments, newest first
#[utoipa::path(
    get,
    path = "/api/deployments",
    params(DeploymentListParams),
    responses(
        (status = 200, description = "List of deployments", body = Vec<DeploymentDetailResponse>),
        (status = 400, description = "Invalid limit")
    ),
    tag = "Deployments"
)]
pub async fn list_deployments(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DeploymentListParams>,
) -> AppResult<Json<Vec<DeploymentDetailResponse>>> {
    let deployments = state.storage.get_deployments(params.limit).await?;

    let data = try_join_all(deployments.into_iter().map(|d| with_deployer(&state, d))).await?;

    Ok(Json(data))
}

/// Get a deployment by ID
#[utoipa::path(
    get,
    path = "/api/deployments/{id}",
    params(
        ("id" = i32, Path, description = "Deployment ID")
    ),
    responses(
        (status = 200, description = "Deployment details", body = DeploymentDetailResponse),
        (status = 404, description = "Deployment not found")
    ),
    tag = "Deployments"
)]
pub async fn get_deployment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<DeploymentDetailResponse>> {
    let deployment = state
        .storage
        .get_deployment(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Deployment".to_string()))?;

    Ok(Json(with_deployer(&state, deployment).await?))
}

/// Record a new deployment
#[utoipa::path(
    post,
    path = "/api/deployments",
    request_body = CreateDeploymentRequest,
    responses(
        (status = 201, description = "Deployment created successfully", body = DeploymentResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Deployments"
)]
pub async fn create_deployment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDeploymentRequest>,
) -> AppResult<(StatusCode, Json<DeploymentResponse>)> {
    validate_required(&payload.name, "Name", MAX_NAME_LENGTH)?;
    validate_required(&payload.status, "Status", MAX_NAME_LENGTH)?;
    validate_required(&payload.environment, "Environment", MAX_NAME_LENGTH)?;

    let new_deployment = NewDeployment {
        name: payload.name,
        build_number: payload.build_number,
        status: payload.status,
        environment: payload.environment,
        deployed_by: payload.deployed_by,
    };

    let deployment = state.storage.create_deployment(new_deployment).await?;
    tracing::info!(
        deployment_id = deployment.id,
        build_number = deployment.build_number,
        environment = %deployment.environment,
        "Deployment recorded"
    );

    Ok((StatusCode::CREATED, Json(deployment.into())))
}

/// Update the status of a deployment
#[utoipa::path(
    patch,
    path = "/api/deployments/{id}/status",
    params(
        ("id" = i32, Path, description = "Deployment ID")
    ),
    request_body = UpdateDeploymentStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = DeploymentResponse),
        (status = 400, description = "Status is required"),
        (status = 404, description = "Deployment not found")
    ),
    tag = "Deployments"
)]
pub async fn update_deployment_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateDeploymentStatusRequest>,
) -> AppResult<Json<DeploymentResponse>> {
    let status = require_field(payload.status, "Status")?;
    validate_required(&status, "Status", MAX_NAME_LENGTH)?;

    let deployment = state
        .storage
        .update_deployment_status(id, status)
        .await?
        .ok_or_else(|| AppError::NotFound("Deployment".to_string()))?;
    tracing::info!(deployment_id = id, status = %deployment.status, "Deployment status updated");

    Ok(Json(deployment.into()))
}
