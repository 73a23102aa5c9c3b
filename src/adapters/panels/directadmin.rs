use crate::adapters::traits::{
    AccountLister, FormField, ManagerFactory, ManagerForm, RemoteAccount, ServerManager,
};
use crate::billing::models::{HostingServer, ServiceStatus};
use crate::error::{AppError, AppResult, RemoteError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_DA_PORT: i32 = 2222;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Manager for DirectAdmin servers, using the legacy CMD_API endpoints in
/// JSON mode with basic authentication.
///
/// DirectAdmin's user list carries usernames only, so listing performs one
/// `CMD_API_SHOW_USER_CONFIG` call per user to resolve email and suspension
/// state.
#[derive(Debug)]
pub struct DirectAdminManager {
    base_url: String,
    username: String,
    password: String,
    client: reqwest::Client,
}

impl DirectAdminManager {
    pub fn new(base_url: String, username: String, password: String) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            username,
            password,
            client,
        })
    }

    async fn call(&self, command: &str, query: &[(&str, &str)]) -> AppResult<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, command);
        let response = self
            .client
            .get(&url)
            .query(&[("json", "yes")])
            .query(query)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(RemoteError::from)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(RemoteError::Auth(format!(
                "DirectAdmin rejected credentials for user '{}'",
                self.username
            ))
            .into());
        }

        Ok(response)
    }

    async fn fetch_usernames(&self) -> AppResult<Vec<String>> {
        let response = self.call("CMD_API_SHOW_ALL_USERS", &[]).await?;
        let usernames: Vec<String> = response.json().await.map_err(RemoteError::from)?;
        Ok(usernames)
    }

    async fn fetch_user_config(&self, username: &str) -> AppResult<DaUserConfig> {
        let response = self
            .call("CMD_API_SHOW_USER_CONFIG", &[("user", username)])
            .await?;
        let config: DaUserConfig = response.json().await.map_err(RemoteError::from)?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
struct DaUserConfig {
    #[serde(default)]
    email: String,
    #[serde(default)]
    suspended: String,
    #[serde(default)]
    domain: Option<String>,
}

fn map_user(username: &str, config: DaUserConfig) -> RemoteAccount {
    RemoteAccount {
        username: username.to_string(),
        email: config.email,
        status: if config.suspended.eq_ignore_ascii_case("yes") {
            ServiceStatus::Suspended
        } else {
            ServiceStatus::Active
        },
        domain: config.domain,
    }
}

#[async_trait]
impl ServerManager for DirectAdminManager {
    fn kind(&self) -> &'static str {
        "directadmin"
    }

    fn form(&self) -> ManagerForm {
        ManagerForm {
            label: "DirectAdmin".to_string(),
            fields: vec![
                FormField {
                    name: "hostname",
                    label: "DirectAdmin hostname",
                    required: true,
                },
                FormField {
                    name: "username",
                    label: "Admin username",
                    required: true,
                },
                FormField {
                    name: "password",
                    label: "Admin password or login key",
                    required: true,
                },
            ],
        }
    }

    fn account_lister(&self) -> Option<&dyn AccountLister> {
        Some(self)
    }

    async fn is_available(&self) -> AppResult<bool> {
        let response = self.call("CMD_API_LOGIN_TEST", &[]).await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl AccountLister for DirectAdminManager {
    async fn list_accounts(&self) -> AppResult<Vec<RemoteAccount>> {
        let usernames = self.fetch_usernames().await?;

        let mut accounts = Vec::with_capacity(usernames.len());
        for username in usernames {
            let config = self.fetch_user_config(&username).await?;
            accounts.push(map_user(&username, config));
        }

        Ok(accounts)
    }
}

pub struct DirectAdminFactory;

impl ManagerFactory for DirectAdminFactory {
    fn kind(&self) -> &'static str {
        "directadmin"
    }

    fn create(&self, server: &HostingServer) -> AppResult<Arc<dyn ServerManager>> {
        let username = server.username.clone().ok_or_else(|| {
            AppError::Config(format!(
                "DirectAdmin server '{}' has no admin username configured",
                server.name
            ))
        })?;
        let password = server.password.clone().ok_or_else(|| {
            AppError::Config(format!(
                "DirectAdmin server '{}' has no admin password configured",
                server.name
            ))
        })?;

        let scheme = if server.secure { "https" } else { "http" };
        let port = server.port.unwrap_or(DEFAULT_DA_PORT);
        let base_url = format!("{}://{}:{}", scheme, server.hostname, port);

        Ok(Arc::new(DirectAdminManager::new(
            base_url, username, password,
        )?))
    }
}
