use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub id: i32,
    pub name: String,
    /// Free text, e.g. `nginx`, `angular`, `helm`
    pub config_type: String,
    pub content: String,
    pub created_by: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConfiguration {
    pub name: String,
    pub config_type: String,
    pub content: String,
    pub created_by: Option<i32>,
}

impl Configuration {
    pub fn from_new(id: i32, input: NewConfiguration, now: OffsetDateTime) -> Self {
        Self {
            id,
            name: input.name,
            config_type: input.config_type,
            content: input.content,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
