use crate::adapters::traits::RemoteAccount;
use crate::billing::models::{Client, ServiceStatus};
use crate::sync::models::{ActionKind, LocalMatch, SuggestedAction};

/// Decides which reconciliation actions to suggest for one remote account.
///
/// Pure: all lookups happen before the call. `client_by_email` is the client
/// whose email equals the remote account's, and is only consulted (and only
/// needs to be resolved) when there is no local match.
pub fn suggest_actions(
    remote: &RemoteAccount,
    local: Option<&LocalMatch>,
    client_by_email: Option<&Client>,
) -> Vec<SuggestedAction> {
    let Some(local) = local else {
        let label = match client_by_email {
            Some(_) => format!("Link to: {}", remote.email),
            None => "Create a client and link to it".to_string(),
        };
        // No further checks apply to an unmatched account.
        return vec![SuggestedAction {
            id: ActionKind::Create,
            label,
        }];
    };

    let mut suggested = Vec::new();

    if let Some(order) = &local.order {
        if order.status == ServiceStatus::Suspended && remote.status == ServiceStatus::Active {
            suggested.push(SuggestedAction {
                id: ActionKind::Unsuspend,
                label: "Unsuspend the account".to_string(),
            });
        }

        if order.status == ServiceStatus::Active && remote.status == ServiceStatus::Suspended {
            suggested.push(SuggestedAction {
                id: ActionKind::Suspend,
                label: "Suspend the account".to_string(),
            });
        }
    }

    suggested
}
