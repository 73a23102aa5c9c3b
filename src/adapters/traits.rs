use crate::billing::models::{HostingServer, ServiceStatus};
use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An account as reported by a remote control panel.
///
/// Ephemeral: exists only for the duration of one reconciliation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteAccount {
    pub username: String,
    pub email: String,
    pub status: ServiceStatus,
    pub domain: Option<String>,
}

/// Descriptor of a manager's configuration form, shown when an
/// administrator sets up a server of this kind.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerForm {
    pub label: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// Base trait for server managers, one instance per configured server.
///
/// Optional capabilities are exposed through typed accessors rather than
/// reflection: a manager that can enumerate its accounts overrides
/// `account_lister` to return itself.
#[async_trait]
pub trait ServerManager: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> &'static str;

    fn form(&self) -> ManagerForm;

    /// The account-listing capability, if this manager has one.
    fn account_lister(&self) -> Option<&dyn AccountLister> {
        None
    }

    /// Lightweight connectivity probe against the panel.
    async fn is_available(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Capability for enumerating the accounts that exist on the panel.
#[async_trait]
pub trait AccountLister: Send + Sync {
    async fn list_accounts(&self) -> AppResult<Vec<RemoteAccount>>;
}

/// Builds a manager instance from a server row. Construction is pure:
/// credential validation may fail, but no I/O happens here.
pub trait ManagerFactory: Send + Sync {
    fn kind(&self) -> &'static str;

    fn create(&self, server: &HostingServer) -> AppResult<Arc<dyn ServerManager>>;
}
