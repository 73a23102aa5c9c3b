use crate::adapters::traits::{
    AccountLister, FormField, ManagerFactory, ManagerForm, RemoteAccount, ServerManager,
};
use crate::billing::models::{HostingServer, ServiceStatus};
use crate::error::{AppError, AppResult, RemoteError};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_WHM_PORT: i32 = 2087;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Manager for cPanel/WHM servers, using the WHM JSON API with token
/// authentication (`Authorization: whm user:token`).
#[derive(Debug)]
pub struct CpanelManager {
    base_url: String,
    username: String,
    token: String,
    client: reqwest::Client,
}

impl CpanelManager {
    pub fn new(base_url: String, username: String, token: String) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            username,
            token,
            client,
        })
    }

    fn auth_header(&self) -> String {
        format!("whm {}:{}", self.username, self.token)
    }

    async fn call(&self, function: &str) -> AppResult<reqwest::Response> {
        let url = format!("{}/json-api/{}?api.version=1", self.base_url, function);
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await
            .map_err(RemoteError::from)?;

        if response.status() == StatusCode::UNAUTHORIZED || response.status() == StatusCode::FORBIDDEN
        {
            return Err(RemoteError::Auth(format!(
                "WHM rejected API token for user '{}'",
                self.username
            ))
            .into());
        }

        Ok(response)
    }
}

#[derive(Debug, Deserialize)]
struct ListAcctsResponse {
    metadata: WhmMetadata,
    #[serde(default)]
    data: ListAcctsData,
}

#[derive(Debug, Deserialize)]
struct WhmMetadata {
    result: i64,
    #[serde(default)]
    reason: String,
}

#[derive(Debug, Default, Deserialize)]
struct ListAcctsData {
    #[serde(default)]
    acct: Vec<WhmAccount>,
}

#[derive(Debug, Deserialize)]
struct WhmAccount {
    user: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    suspended: u8,
}

fn map_listaccts(response: ListAcctsResponse) -> AppResult<Vec<RemoteAccount>> {
    if response.metadata.result != 1 {
        return Err(RemoteError::Api(response.metadata.reason).into());
    }

    let accounts = response
        .data
        .acct
        .into_iter()
        .map(|acct| RemoteAccount {
            username: acct.user,
            email: acct.email,
            status: if acct.suspended != 0 {
                ServiceStatus::Suspended
            } else {
                ServiceStatus::Active
            },
            domain: acct.domain,
        })
        .collect();

    Ok(accounts)
}

#[async_trait]
impl ServerManager for CpanelManager {
    fn kind(&self) -> &'static str {
        "cpanel"
    }

    fn form(&self) -> ManagerForm {
        ManagerForm {
            label: "cPanel/WHM".to_string(),
            fields: vec![
                FormField {
                    name: "hostname",
                    label: "WHM hostname",
                    required: true,
                },
                FormField {
                    name: "username",
                    label: "WHM username",
                    required: true,
                },
                FormField {
                    name: "api_token",
                    label: "API token",
                    required: true,
                },
            ],
        }
    }

    fn account_lister(&self) -> Option<&dyn AccountLister> {
        Some(self)
    }

    async fn is_available(&self) -> AppResult<bool> {
        let response = self.call("version").await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl AccountLister for CpanelManager {
    async fn list_accounts(&self) -> AppResult<Vec<RemoteAccount>> {
        let response = self.call("listaccts").await?;
        let parsed: ListAcctsResponse = response.json().await.map_err(RemoteError::from)?;
        map_listaccts(parsed)
    }
}

pub struct CpanelFactory;

impl ManagerFactory for CpanelFactory {
    fn kind(&self) -> &'static str {
        "cpanel"
    }

    fn create(&self, server: &HostingServer) -> AppResult<Arc<dyn ServerManager>> {
        let token = server.api_token.clone().ok_or_else(|| {
            AppError::Config(format!(
                "cPanel server '{}' has no API token configured",
                server.name
            ))
        })?;
        let username = server.username.clone().unwrap_or_else(|| "root".to_string());

        let scheme = if server.secure { "https" } else { "http" };
        let port = server.port.unwrap_or(DEFAULT_WHM_PORT);
        let base_url = format!("{}://{}:{}", scheme, server.hostname, port);

        Ok(Arc::new(CpanelManager::new(base_url, username, token)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTACCTS_FIXTURE: &str = r#"{
        "metadata": { "version": 1, "command": "listaccts", "result": 1, "reason": "OK" },
        "data": { "acct": [
            { "user": "zoe", "email": "zoe@example.com", "domain": "zoe.example.com", "suspended": 0 },
            { "user": "bob", "email": "bob@x.com", "domain": "bob.example.com", "suspended": 1 }
        ] }
    }"#;

    #[test]
    fn maps_listaccts_accounts() {
        let parsed: ListAcctsResponse = serde_json::from_str(LISTACCTS_FIXTURE).unwrap();
        let accounts = map_listaccts(parsed).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].username, "zoe");
        assert_eq!(accounts[0].status, ServiceStatus::Active);
        assert_eq!(accounts[1].username, "bob");
        assert_eq!(accounts[1].status, ServiceStatus::Suspended);
        assert_eq!(accounts[1].domain.as_deref(), Some("bob.example.com"));
    }

    #[test]
    fn panel_failure_becomes_remote_api_error() {
        let fixture = r#"{
            "metadata": { "result": 0, "reason": "API failure: access denied" },
            "data": { "acct": [] }
        }"#;
        let parsed: ListAcctsResponse = serde_json::from_str(fixture).unwrap();
        let err = map_listaccts(parsed).unwrap_err();
        assert!(matches!(
            err,
            AppError::Remote(RemoteError::Api(reason)) if reason.contains("access denied")
        ));
    }

    #[test]
    fn form_describes_required_credentials() {
        let manager =
            CpanelManager::new("https://web01.example.com:2087".to_string(), "root".to_string(), "token".to_string())
                .unwrap();
        let form = manager.form();

        assert_eq!(form.label, "cPanel/WHM");
        let token_field = form.fields.iter().find(|f| f.name == "api_token").unwrap();
        assert!(token_field.required);
    }

    #[test]
    fn factory_requires_api_token() {
        use chrono::Utc;

        let server = HostingServer {
            id: 7,
            name: "web07".to_string(),
            hostname: "web07.example.com".to_string(),
            ip: None,
            manager: "cpanel".to_string(),
            username: None,
            password: None,
            api_token: None,
            port: None,
            secure: true,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let err = CpanelFactory.create(&server).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
