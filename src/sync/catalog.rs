use crate::adapters::registry::ManagerRegistry;
use crate::billing::repository::BillingRepository;
use crate::error::AppResult;
use crate::sync::models::{ManagerInfo, ServerSummary};
use std::sync::Arc;

/// Enumerates the configured hosting servers together with what their
/// managers can do, so the admin UI knows which servers can be reconciled.
pub struct ServerCatalog {
    billing: Arc<dyn BillingRepository>,
    registry: Arc<ManagerRegistry>,
}

impl ServerCatalog {
    pub fn new(billing: Arc<dyn BillingRepository>, registry: Arc<ManagerRegistry>) -> Self {
        Self { billing, registry }
    }

    /// Lists all configured servers with their manager label and whether the
    /// manager supports account synchronization.
    ///
    /// A pair whose row cannot be resolved aborts the whole listing; a
    /// partially resolved catalog would silently hide servers.
    pub async fn list_servers(&self) -> AppResult<Vec<ServerSummary>> {
        let pairs = self.billing.get_server_pairs().await?;

        let mut servers = Vec::with_capacity(pairs.len());
        for (id, name) in pairs {
            let server = self.billing.get_server_by_id(id).await?;
            let manager = self.registry.manager_for(&server)?;

            servers.push(ServerSummary {
                id,
                name,
                manager: ManagerInfo {
                    label: manager.form().label,
                    supports_sync: manager.account_lister().is_some(),
                },
            });
        }

        Ok(servers)
    }

    /// Probes the control panel behind one server.
    ///
    /// Resolution failures surface the same way as in `list_servers`;
    /// remote failures propagate from the manager untouched.
    pub async fn check_availability(&self, server_id: i64) -> AppResult<bool> {
        let server = self.billing.get_server_by_id(server_id).await?;
        let manager = self.registry.manager_for(&server)?;

        manager.is_available().await
    }
}
