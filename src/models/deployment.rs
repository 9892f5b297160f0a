use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Status values the dashboard knows how to render. Any other text is
/// accepted and stored as-is.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const SUCCESSFUL: &str = "successful";
    pub const FAILED: &str = "failed";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: i32,
    pub name: String,
    pub build_number: i32,
    pub status: String,
    pub environment: String,
    pub deployed_by: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub deployed_at: OffsetDateTime,
}

/// Deployment creation DTO; `deployed_at` is stamped by the store
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeployment {
    pub name: String,
    pub build_number: i32,
    pub status: String,
    pub environment: String,
    pub deployed_by: Option<i32>,
}

impl Deployment {
    pub fn from_new(id: i32, input: NewDeployment, deployed_at: OffsetDateTime) -> Self {
        Self {
            id,
            name: input.name,
            build_number: input.build_number,
            status: input.status,
            environment: input.environment,
            deployed_by: input.deployed_by,
            deployed_at,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.status == status::SUCCESSFUL
    }

    pub fn is_failed(&self) -> bool {
        self.status == status::FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_deployment_serializes_camel_case_rfc3339() {
        let deployment = Deployment::from_new(
            4,
            NewDeployment {
                name: "x".to_string(),
                build_number: 1,
                status: status::PENDING.to_string(),
                environment: "dev".to_string(),
                deployed_by: None,
            },
            datetime!(2024-05-01 08:30:00 UTC),
        );

        let value = serde_json::to_value(&deployment).unwrap();
        assert_eq!(value["buildNumber"], 1);
        assert_eq!(value["deployedAt"], "2024-05-01T08:30:00Z");
        assert!(value["deployedBy"].is_null());
    }
}
