pub mod memory;
pub mod seed;

pub use memory::MemStorage;
pub use seed::seed_defaults;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Configuration, Deployment, NewConfiguration, NewDeployment, NewUser, User,
};

/// Storage trait for abstracting record backends.
///
/// Lookups return `Ok(None)` for unknown keys so handlers decide how a
/// miss is reported. The in-memory backend never fails; the `AppResult`
/// return leaves room for a durable one.
#[async_trait]
pub trait Storage: Send + Sync {
    // User operations
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn create_user(&self, input: NewUser) -> AppResult<User>;

    // Deployment operations

    /// Deployments newest first. `None` or `Some(0)` returns every record.
    async fn get_deployments(&self, limit: Option<usize>) -> AppResult<Vec<Deployment>>;

    async fn get_deployment(&self, id: i32) -> AppResult<Option<Deployment>>;

    async fn create_deployment(&self, input: NewDeployment) -> AppResult<Deployment>;

    async fn update_deployment_status(
        &self,
        id: i32,
        status: String,
    ) -> AppResult<Option<Deployment>>;

    // Configuration operations
    async fn get_configurations(&self) -> AppResult<Vec<Configuration>>;

    async fn get_configuration_by_name(&self, name: &str) -> AppResult<Option<Configuration>>;

    async fn get_configurations_by_type(&self, config_type: &str)
        -> AppResult<Vec<Configuration>>;

    async fn create_configuration(&self, input: NewConfiguration) -> AppResult<Configuration>;

    /// Replace the content and bump `updated_at`; `created_at` is kept.
    async fn update_configuration(
        &self,
        id: i32,
        content: String,
    ) -> AppResult<Option<Configuration>>;
}
