use deploy_dashboard::models::{
    Configuration, Deployment, NewConfiguration, NewDeployment, NewUser, User,
};
use deploy_dashboard::state::AppState;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a user with the given username
    pub async fn create_user(&self, username: &str) -> User {
        let input = NewUser {
            username: username.to_string(),
            password: "hunter2".to_string(),
            email: Some(format!("{username}@example.com")),
            full_name: Some(format!("Test {username}")),
        };

        self.state.storage.create_user(input).await.unwrap()
    }

    /// Create a staging deployment with the given status
    pub async fn create_deployment(&self, name: &str, status: &str) -> Deployment {
        let input = NewDeployment {
            name: name.to_string(),
            build_number: 100,
            status: status.to_string(),
            environment: "staging".to_string(),
            deployed_by: None,
        };

        self.state.storage.create_deployment(input).await.unwrap()
    }

    /// Create a deployment attributed to a user
    pub async fn create_deployment_by(&self, name: &str, user_id: i32) -> Deployment {
        let input = NewDeployment {
            name: name.to_string(),
            build_number: 200,
            status: "pending".to_string(),
            environment: "production".to_string(),
            deployed_by: Some(user_id),
        };

        self.state.storage.create_deployment(input).await.unwrap()
    }

    /// Create a configuration of the given type
    pub async fn create_configuration(&self, name: &str, config_type: &str) -> Configuration {
        let input = NewConfiguration {
            name: name.to_string(),
            config_type: config_type.to_string(),
            content: format!("# {name}"),
            created_by: None,
        };

        self.state.storage.create_configuration(input).await.unwrap()
    }
}
