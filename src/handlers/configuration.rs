use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::handlers::common::{require_field, validate_required, MAX_NAME_LENGTH};
use crate::models::{Configuration, NewConfiguration};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfigurationListParams {
    /// Only return configurations of this type (e.g. `nginx`)
    #[serde(rename = "type")]
    pub config_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationRequest {
    pub name: String,
    pub config_type: String,
    pub content: String,
    pub created_by: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateConfigurationRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub id: i32,
    pub name: String,
    pub config_type: String,
    pub content: String,
    pub created_by: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Configuration> for ConfigurationResponse {
    fn from(c: Configuration) -> Self {
        Self {
            id: c.id,
            name: c.name,
            config_type: c.config_type,
            content: c.content,
            created_by: c.created_by,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

// ============ Handlers ============

/// List configurations, optionally filtered by type
#[utoipa::path(
    get,
    path = "/api/configurations",
    params(ConfigurationListParams),
    responses(
        (status = 200, description = "List of configurations", body = Vec<ConfigurationResponse>)
    ),
    tag = "Configurations"
)]
pub async fn list_configurations(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ConfigurationListParams>,
) -> AppResult<Json<Vec<ConfigurationResponse>>> {
    let configurations = match params.config_type.as_deref() {
        Some(config_type) => state.storage.get_configurations_by_type(config_type).await?,
        None => state.storage.get_configurations().await?,
    };

    Ok(Json(configurations.into_iter().map(Into::into).collect()))
}

/// Get a configuration by name
#[utoipa::path(
    get,
    path = "/api/configurations/{name}",
    params(
        ("name" = String, Path, description = "Configuration name")
    ),
    responses(
        (status = 200, description = "Configuration details", body = ConfigurationResponse),
        (status = 404, description = "Configuration not found")
    ),
    tag = "Configurations"
)]
pub async fn get_configuration(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<Json<ConfigurationResponse>> {
    let configuration = state
        .storage
        .get_configuration_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound("Configuration".to_string()))?;

    Ok(Json(configuration.into()))
}

/// Create a configuration
#[utoipa::path(
    post,
    path = "/api/configurations",
    request_body = CreateConfigurationRequest,
    responses(
        (status = 201, description = "Configuration created successfully", body = ConfigurationResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Configurations"
)]
pub async fn create_configuration(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateConfigurationRequest>,
) -> AppResult<(StatusCode, Json<ConfigurationResponse>)> {
    validate_required(&payload.name, "Name", MAX_NAME_LENGTH)?;
    validate_required(&payload.config_type, "Config type", MAX_NAME_LENGTH)?;
    if payload.content.is_empty() {
        return Err(AppError::Validation("Content is required".to_string()));
    }

    let new_configuration = NewConfiguration {
        name: payload.name,
        config_type: payload.config_type,
        content: payload.content,
        created_by: payload.created_by,
    };

    let configuration = state.storage.create_configuration(new_configuration).await?;
    tracing::info!(
        configuration_id = configuration.id,
        name = %configuration.name,
        "Configuration created"
    );

    Ok((StatusCode::CREATED, Json(configuration.into())))
}

/// Replace the content of a configuration
#[utoipa::path(
    patch,
    path = "/api/configurations/{id}",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    request_body = UpdateConfigurationRequest,
    responses(
        (status = 200, description = "Configuration updated", body = ConfigurationResponse),
        (status = 400, description = "Content is required"),
        (status = 404, description = "Configuration not found")
    ),
    tag = "Configurations"
)]
pub async fn update_configuration(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateConfigurationRequest>,
) -> AppResult<Json<ConfigurationResponse>> {
    let content = require_field(payload.content, "Content")?;

    let configuration = state
        .storage
        .update_configuration(id, content)
        .await?
        .ok_or_else(|| AppError::NotFound("Configuration".to_string()))?;
    tracing::info!(configuration_id = id, "Configuration content updated");

    Ok(Json(configuration.into()))
}
