use axum::{extract::State, Json};
use serde::Serialize;
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::Deployment;
use crate::state::AppState;

/// Build durations are not tracked yet; the dashboard shows this figure
pub const PLACEHOLDER_AVG_BUILD_TIME: &str = "3m 42s";

const LAST_DEPLOYMENT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub successful_deployments: usize,
    pub failed_deployments: usize,
    pub avg_build_time: String,
    /// Time of the newest deployment, or `N/A` when there is none
    pub last_deployment_time: String,
}

impl StatsResponse {
    /// Summarise deployments that are already sorted newest first
    pub fn from_deployments(deployments: &[Deployment]) -> AppResult<Self> {
        let last_deployment_time = match deployments.first() {
            Some(latest) => format_timestamp(latest.deployed_at)?,
            None => "N/A".to_string(),
        };

        Ok(Self {
            successful_deployments: deployments.iter().filter(|d| d.is_successful()).count(),
            failed_deployments: deployments.iter().filter(|d| d.is_failed()).count(),
            avg_build_time: PLACEHOLDER_AVG_BUILD_TIME.to_string(),
            last_deployment_time,
        })
    }
}

fn format_timestamp(at: OffsetDateTime) -> AppResult<String> {
    at.to_offset(time::UtcOffset::UTC)
        .format(LAST_DEPLOYMENT_FORMAT)
        .map_err(|e| AppError::Internal(format!("failed to format timestamp: {e}")))
}

/// Deployment statistics for the dashboard header
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Deployment statistics", body = StatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let deployments = state.storage.get_deployments(None).await?;
    Ok(Json(StatsResponse::from_deployments(&deployments)?))
}
