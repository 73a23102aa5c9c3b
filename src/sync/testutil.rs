//! Shared fixtures for the reconciliation tests: an in-memory repository and
//! canned server managers.

use crate::adapters::traits::{
    AccountLister, FormField, ManagerFactory, ManagerForm, RemoteAccount, ServerManager,
};
use crate::billing::models::{Client, ClientOrder, HostingAccount, HostingServer, ServiceStatus};
use crate::billing::repository::BillingRepository;
use crate::error::{AppError, AppResult, RemoteError};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) fn hosting_server(id: i64, name: &str, manager: &str) -> HostingServer {
    HostingServer {
        id,
        name: name.to_string(),
        hostname: format!("{}.example.com", name),
        ip: None,
        manager: manager.to_string(),
        username: Some("root".to_string()),
        password: Some("secret".to_string()),
        api_token: Some("token".to_string()),
        port: None,
        secure: true,
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub(crate) fn hosting_account(
    id: i64,
    client_id: i64,
    server_id: i64,
    username: &str,
) -> HostingAccount {
    HostingAccount {
        id,
        client_id,
        server_id,
        username: username.to_string(),
        domain: Some(format!("{}.example.com", username)),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub(crate) fn order(id: i64, client_id: i64, service_id: i64, status: ServiceStatus) -> ClientOrder {
    ClientOrder {
        id,
        client_id,
        service_type: "hosting".to_string(),
        service_id: Some(service_id),
        title: "Shared hosting".to_string(),
        status,
        price: Decimal::new(995, 2),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub(crate) fn client(id: i64, email: &str) -> Client {
    Client {
        id,
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "Client".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub(crate) fn remote(username: &str, email: &str, status: ServiceStatus) -> RemoteAccount {
    RemoteAccount {
        username: username.to_string(),
        email: email.to_string(),
        status,
        domain: None,
    }
}

/// In-memory `BillingRepository`. Fixtures are loaded up front; the
/// repository itself is read-only, like the real one.
#[derive(Default)]
pub(crate) struct MemoryBillingRepository {
    pub servers: HashMap<i64, HostingServer>,
    pub pairs: Vec<(i64, String)>,
    pub accounts: Vec<HostingAccount>,
    pub orders: Vec<ClientOrder>,
    pub clients: Vec<Client>,
}

impl MemoryBillingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_server(&mut self, server: HostingServer) {
        self.pairs.push((server.id, server.name.clone()));
        self.servers.insert(server.id, server);
    }

    /// Registers an `(id, name)` pair with no backing row, to exercise the
    /// listing's resolution failure path.
    pub fn insert_dangling_pair(&mut self, id: i64, name: &str) {
        self.pairs.push((id, name.to_string()));
    }
}

#[async_trait]
impl BillingRepository for MemoryBillingRepository {
    async fn get_server_pairs(&self) -> AppResult<Vec<(i64, String)>> {
        Ok(self.pairs.clone())
    }

    async fn get_server_by_id(&self, server_id: i64) -> AppResult<HostingServer> {
        self.servers
            .get(&server_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))
    }

    async fn find_account_by_server_and_username(
        &self,
        server_id: i64,
        username: &str,
    ) -> AppResult<Option<HostingAccount>> {
        Ok(self
            .accounts
            .iter()
            .find(|a| a.server_id == server_id && a.username == username)
            .cloned())
    }

    async fn find_order_for_service(
        &self,
        service_type: &str,
        service_id: i64,
    ) -> AppResult<Option<ClientOrder>> {
        Ok(self
            .orders
            .iter()
            .find(|o| o.service_type == service_type && o.service_id == Some(service_id))
            .cloned())
    }

    async fn find_client_by_id(&self, client_id: i64) -> AppResult<Option<Client>> {
        Ok(self.clients.iter().find(|c| c.id == client_id).cloned())
    }

    async fn find_client_by_email(&self, email: &str) -> AppResult<Option<Client>> {
        Ok(self.clients.iter().find(|c| c.email == email).cloned())
    }
}

/// Manager stub whose listing capability returns a canned account list.
#[derive(Debug)]
pub(crate) struct StubListingManager {
    pub accounts: Vec<RemoteAccount>,
}

#[async_trait]
impl ServerManager for StubListingManager {
    fn kind(&self) -> &'static str {
        "stub"
    }

    fn form(&self) -> ManagerForm {
        ManagerForm {
            label: "Stub panel".to_string(),
            fields: vec![FormField {
                name: "hostname",
                label: "Hostname",
                required: true,
            }],
        }
    }

    fn account_lister(&self) -> Option<&dyn AccountLister> {
        Some(self)
    }
}

#[async_trait]
impl AccountLister for StubListingManager {
    async fn list_accounts(&self) -> AppResult<Vec<RemoteAccount>> {
        Ok(self.accounts.clone())
    }
}

/// Manager stub with no listing capability.
#[derive(Debug)]
pub(crate) struct StubPlainManager;

#[async_trait]
impl ServerManager for StubPlainManager {
    fn kind(&self) -> &'static str {
        "plain"
    }

    fn form(&self) -> ManagerForm {
        ManagerForm {
            label: "Plain panel".to_string(),
            fields: vec![],
        }
    }
}

/// Manager stub whose listing capability always fails remotely.
#[derive(Debug)]
pub(crate) struct FailingListingManager;

#[async_trait]
impl ServerManager for FailingListingManager {
    fn kind(&self) -> &'static str {
        "failing"
    }

    fn form(&self) -> ManagerForm {
        ManagerForm {
            label: "Failing panel".to_string(),
            fields: vec![],
        }
    }

    fn account_lister(&self) -> Option<&dyn AccountLister> {
        Some(self)
    }
}

#[async_trait]
impl AccountLister for FailingListingManager {
    async fn list_accounts(&self) -> AppResult<Vec<RemoteAccount>> {
        Err(RemoteError::Api("panel connection refused".to_string()).into())
    }
}

pub(crate) enum StubBehavior {
    List(Vec<RemoteAccount>),
    Plain,
    Fail,
}

pub(crate) struct StubFactory {
    pub kind: &'static str,
    pub behavior: StubBehavior,
}

impl ManagerFactory for StubFactory {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn create(&self, _server: &HostingServer) -> AppResult<Arc<dyn ServerManager>> {
        Ok(match &self.behavior {
            StubBehavior::List(accounts) => Arc::new(StubListingManager {
                accounts: accounts.clone(),
            }),
            StubBehavior::Plain => Arc::new(StubPlainManager),
            StubBehavior::Fail => Arc::new(FailingListingManager),
        })
    }
}
