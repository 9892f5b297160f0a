//! Records every fresh dashboard starts with.

use crate::error::AppResult;
use crate::models::{status, NewConfiguration, NewDeployment, NewUser};
use crate::storage::Storage;

const DEFAULT_NGINX_CONFIG: &str = r#"server {
  listen 80;
  location / {
    root   /usr/share/nginx/html;
    index  index.html index.htm;
    try_files $uri $uri/ /index.html;
  }
  # Caching static assets
  location ~* \.(jpg|jpeg|png|gif|ico|css|js)$ {
    expires 1y;
    add_header Cache-Control "public, max-age=31536000";
  }
}"#;

const ANGULAR_PROD_CONFIG: &str = r#"{
  "production": {
    "fileReplacements": [
      {
        "replace": "src/environments/environment.ts",
        "with": "src/environments/environment.prod.ts"
      }
    ],
    "optimization": true,
    "outputHashing": "all",
    "sourceMap": false,
    "namedChunks": false,
    "extractLicenses": true,
    "vendorChunk": false,
    "buildOptimizer": true,
    "budgets": [
      {
        "type": "initial",
        "maximumWarning": "2mb",
        "maximumError": "5mb"
      }
    ]
  }
}"#;

/// Insert the admin user, two configurations and three deployments.
///
/// Meant for an empty store: the records reference the admin as id 1.
pub async fn seed_defaults(storage: &dyn Storage) -> AppResult<()> {
    let admin = storage
        .create_user(NewUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: Some("admin@example.com".to_string()),
            full_name: Some("Administrator".to_string()),
        })
        .await?;

    let configurations = [
        ("default-nginx-config", "nginx", DEFAULT_NGINX_CONFIG),
        ("angular-prod-config", "angular", ANGULAR_PROD_CONFIG),
    ];
    for (name, config_type, content) in configurations {
        storage
            .create_configuration(NewConfiguration {
                name: name.to_string(),
                config_type: config_type.to_string(),
                content: content.to_string(),
                created_by: Some(admin.id),
            })
            .await?;
    }

    // Oldest first, so the production release is the newest record
    let deployments = [
        ("dev-v1.2.4", 456, status::FAILED, "development"),
        ("staging-v1.2.5", 457, status::SUCCESSFUL, "staging"),
        ("production-v1.2.5", 458, status::SUCCESSFUL, "production"),
    ];
    for (name, build_number, deployment_status, environment) in deployments {
        storage
            .create_deployment(NewDeployment {
                name: name.to_string(),
                build_number,
                status: deployment_status.to_string(),
                environment: environment.to_string(),
                deployed_by: Some(admin.id),
            })
            .await?;
    }

    tracing::debug!(
        admin_id = admin.id,
        "Seeded store with default user, configurations and deployments"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let storage = MemStorage::seeded().await.unwrap();

        let admin = storage.get_user_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.full_name.as_deref(), Some("Administrator"));

        let configs = storage.get_configurations().await.unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].name, "default-nginx-config");
        assert!(configs[0].content.contains("try_files $uri $uri/ /index.html;"));
        assert_eq!(configs[1].config_type, "angular");

        let deployments = storage.get_deployments(None).await.unwrap();
        let builds: Vec<i32> = deployments.iter().map(|d| d.build_number).collect();
        assert_eq!(builds, vec![458, 457, 456]);
        assert_eq!(deployments[0].name, "production-v1.2.5");
        assert!(deployments.iter().all(|d| d.deployed_by == Some(1)));
    }
}
