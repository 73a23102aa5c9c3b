use crate::adapters::traits::{FormField, ManagerFactory, ManagerForm, ServerManager};
use crate::billing::models::HostingServer;
use crate::error::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Manager for servers provisioned through a user-supplied webhook.
///
/// The webhook contract covers provisioning commands only; the panel behind
/// it has no account enumeration API, so this manager exposes no
/// `AccountLister` capability and such servers cannot be reconciled.
#[derive(Debug)]
pub struct CustomManager {
    endpoint: String,
}

impl CustomManager {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ServerManager for CustomManager {
    fn kind(&self) -> &'static str {
        "custom"
    }

    fn form(&self) -> ManagerForm {
        ManagerForm {
            label: "Custom (webhook)".to_string(),
            fields: vec![
                FormField {
                    name: "hostname",
                    label: "Webhook host",
                    required: true,
                },
                FormField {
                    name: "api_token",
                    label: "Shared secret",
                    required: false,
                },
            ],
        }
    }
}

pub struct CustomFactory;

impl ManagerFactory for CustomFactory {
    fn kind(&self) -> &'static str {
        "custom"
    }

    fn create(&self, server: &HostingServer) -> AppResult<Arc<dyn ServerManager>> {
        let scheme = if server.secure { "https" } else { "http" };
        let endpoint = format!("{}://{}/hosting-webhook", scheme, server.hostname);
        Ok(Arc::new(CustomManager::new(endpoint)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_no_listing_capability() {
        let manager = CustomManager::new("https://example.com/hosting-webhook".to_string());
        assert!(manager.account_lister().is_none());
    }

    #[test]
    fn endpoint_scheme_follows_server_security() {
        use chrono::Utc;

        let server = HostingServer {
            id: 3,
            name: "legacy".to_string(),
            hostname: "legacy.example.com".to_string(),
            ip: None,
            manager: "custom".to_string(),
            username: None,
            password: None,
            api_token: None,
            port: None,
            secure: false,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let manager = CustomManager::new(format!(
            "http://{}/hosting-webhook",
            server.hostname
        ));
        assert_eq!(manager.endpoint(), "http://legacy.example.com/hosting-webhook");

        let created = CustomFactory.create(&server).unwrap();
        assert_eq!(created.kind(), "custom");
    }
}
