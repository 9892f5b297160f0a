use std::sync::Arc;

use axum_test::TestServer;
use deploy_dashboard::build_router;
use deploy_dashboard::config::Config;
use deploy_dashboard::state::AppState;
use deploy_dashboard::storage::MemStorage;

/// Test configuration
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Config::default()
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a test application over a seeded store
    pub async fn new() -> Self {
        let storage = MemStorage::seeded()
            .await
            .expect("Failed to seed test storage");
        Self::with_storage(storage)
    }

    /// Create a test application over an empty store
    pub async fn empty() -> Self {
        Self::with_storage(MemStorage::new())
    }

    fn with_storage(storage: MemStorage) -> Self {
        let state = AppState::with_storage(test_config(), Arc::new(storage));
        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
