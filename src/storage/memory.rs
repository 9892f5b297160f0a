use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{
    Configuration, Deployment, NewConfiguration, NewDeployment, NewUser, User,
};
use crate::storage::Storage;

/// In-memory store that lives as long as the process
#[derive(Clone, Default)]
pub struct MemStorage {
    inner: Arc<RwLock<MemStorageInner>>,
}

#[derive(Default)]
struct MemStorageInner {
    users: Table<User>,
    deployments: Table<Deployment>,
    configurations: Table<Configuration>,
}

/// One logical table: rows keyed by id plus the id sequence.
///
/// Ids start at 1 and are never handed out twice.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> AppResult<T> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("id sequence exhausted".to_string()))?;
        self.last_id = id;
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn update_with(&mut self, id: i32, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }
}

impl MemStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the default admin user and samples
    pub async fn seeded() -> AppResult<Self> {
        let storage = Self::new();
        super::seed_defaults(&storage).await?;
        Ok(storage)
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.rows.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .rows
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, input: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        inner.users.insert_with(|id| User::from_new(id, input))
    }

    async fn get_deployments(&self, limit: Option<usize>) -> AppResult<Vec<Deployment>> {
        let inner = self.inner.read().await;
        let mut deployments: Vec<Deployment> = inner.deployments.rows.values().cloned().collect();

        // Newest first; equal timestamps fall back to the later id
        deployments.sort_by(|a, b| {
            b.deployed_at
                .cmp(&a.deployed_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        if let Some(limit) = limit.filter(|l| *l > 0) {
            deployments.truncate(limit);
        }

        Ok(deployments)
    }

    async fn get_deployment(&self, id: i32) -> AppResult<Option<Deployment>> {
        let inner = self.inner.read().await;
        Ok(inner.deployments.rows.get(&id).cloned())
    }

    async fn create_deployment(&self, input: NewDeployment) -> AppResult<Deployment> {
        let mut inner = self.inner.write().await;
        let deployed_at = OffsetDateTime::now_utc();
        inner
            .deployments
            .insert_with(|id| Deployment::from_new(id, input, deployed_at))
    }

    async fn update_deployment_status(
        &self,
        id: i32,
        status: String,
    ) -> AppResult<Option<Deployment>> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .deployments
            .update_with(id, |deployment| deployment.status = status))
    }

    async fn get_configurations(&self) -> AppResult<Vec<Configuration>> {
        let inner = self.inner.read().await;
        Ok(inner.configurations.rows.values().cloned().collect())
    }

    async fn get_configuration_by_name(&self, name: &str) -> AppResult<Option<Configuration>> {
        let inner = self.inner.read().await;
        Ok(inner
            .configurations
            .rows
            .values()
            .find(|config| config.name == name)
            .cloned())
    }

    async fn get_configurations_by_type(
        &self,
        config_type: &str,
    ) -> AppResult<Vec<Configuration>> {
        let inner = self.inner.read().await;
        Ok(inner
            .configurations
            .rows
            .values()
            .filter(|config| config.config_type == config_type)
            .cloned()
            .collect())
    }

    async fn create_configuration(&self, input: NewConfiguration) -> AppResult<Configuration> {
        let mut inner = self.inner.write().await;
        let now = OffsetDateTime::now_utc();
        inner
            .configurations
            .insert_with(|id| Configuration::from_new(id, input, now))
    }

    async fn update_configuration(
        &self,
        id: i32,
        content: String,
    ) -> AppResult<Option<Configuration>> {
        let mut inner = self.inner.write().await;
        let now = OffsetDateTime::now_utc();
        Ok(inner.configurations.update_with(id, |config| {
            config.content = content;
            config.updated_at = now;
        }))
    }
}
