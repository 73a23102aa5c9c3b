use crate::adapters::registry::ManagerRegistry;
use crate::adapters::traits::RemoteAccount;
use crate::billing::repository::BillingRepository;
use crate::error::{AppError, AppResult};
use crate::sync::models::{LocalMatch, ReconciliationEntry};
use crate::sync::suggest::suggest_actions;
use std::sync::Arc;

/// Service type under which hosting accounts are ordered.
const HOSTING_SERVICE_TYPE: &str = "hosting";

/// Joins the accounts a hosting server reports against the billing
/// database and computes suggested reconciliation actions.
///
/// Read-only: one invocation is one remote listing plus local lookups, and
/// produces a report. Acting on a suggestion happens elsewhere.
pub struct AccountReconciler {
    billing: Arc<dyn BillingRepository>,
    registry: Arc<ManagerRegistry>,
}

impl AccountReconciler {
    pub fn new(billing: Arc<dyn BillingRepository>, registry: Arc<ManagerRegistry>) -> Self {
        Self { billing, registry }
    }

    /// Builds the reconciliation report for one server.
    ///
    /// Fails with `NotFound` for an unknown server id, `SyncUnsupported`
    /// when the server's manager cannot enumerate accounts, and propagates
    /// remote failures as-is. There is no partial report: either every
    /// remote account is joined or the call errors.
    pub async fn reconcile(&self, server_id: i64) -> AppResult<Vec<ReconciliationEntry>> {
        let server = self.billing.get_server_by_id(server_id).await?;
        let manager = self.registry.manager_for(&server)?;

        let Some(lister) = manager.account_lister() else {
            return Err(AppError::SyncUnsupported(
                "This server manager does not support synchronizing accounts".to_string(),
            ));
        };

        let remote_accounts = lister.list_accounts().await?;

        let mut entries = Vec::with_capacity(remote_accounts.len());
        for remote in remote_accounts {
            let local = self.find_local_match(server.id, &remote).await?;

            // The client-by-email lookup only matters for unmatched accounts.
            let client_by_email = if local.is_none() {
                self.billing.find_client_by_email(&remote.email).await?
            } else {
                None
            };

            let suggested_actions =
                suggest_actions(&remote, local.as_ref(), client_by_email.as_ref());

            entries.push(ReconciliationEntry {
                server: remote,
                local,
                suggested_actions,
            });
        }

        // Stable sort: duplicate usernames keep the order the panel
        // returned them in.
        entries.sort_by(|a, b| a.server.username.cmp(&b.server.username));

        Ok(entries)
    }

    /// Looks up the billing side of one remote account. The order and client
    /// are only resolved once an account row has matched.
    async fn find_local_match(
        &self,
        server_id: i64,
        remote: &RemoteAccount,
    ) -> AppResult<Option<LocalMatch>> {
        let Some(account) = self
            .billing
            .find_account_by_server_and_username(server_id, &remote.username)
            .await?
        else {
            return Ok(None);
        };

        let order = self
            .billing
            .find_order_for_service(HOSTING_SERVICE_TYPE, account.id)
            .await?;
        let client = self.billing.find_client_by_id(account.client_id).await?;

        Ok(Some(LocalMatch {
            account,
            order,
            client,
        }))
    }
}
