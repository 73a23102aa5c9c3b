use crate::adapters::traits::RemoteAccount;
use crate::billing::models::{Client, ClientOrder, HostingAccount};
use serde::{Deserialize, Serialize};

/// Reconciliation action an administrator may take on one entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Create,
    Suspend,
    Unsuspend,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestedAction {
    pub id: ActionKind,
    pub label: String,
}

/// Billing-side view of a remote account that matched by
/// `(server_id, username)`: the hosting account row plus its order and
/// owning client, when they exist.
#[derive(Clone, Debug, Serialize)]
pub struct LocalMatch {
    pub account: HostingAccount,
    pub order: Option<ClientOrder>,
    pub client: Option<Client>,
}

/// One row of the reconciliation report.
#[derive(Clone, Debug, Serialize)]
pub struct ReconciliationEntry {
    pub server: RemoteAccount,
    pub local: Option<LocalMatch>,
    pub suggested_actions: Vec<SuggestedAction>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ManagerInfo {
    pub label: String,
    pub supports_sync: bool,
}

/// One row of the server listing.
#[derive(Clone, Debug, Serialize)]
pub struct ServerSummary {
    pub id: i64,
    pub name: String,
    pub manager: ManagerInfo,
}
