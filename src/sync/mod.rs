pub mod catalog;
pub mod handlers;
pub mod models;
pub mod reconciler;
pub mod suggest;

#[cfg(test)]
pub(crate) mod testutil;

pub use catalog::ServerCatalog;
pub use models::{
    ActionKind, LocalMatch, ManagerInfo, ReconciliationEntry, ServerSummary, SuggestedAction,
};
pub use reconciler::AccountReconciler;
pub use suggest::suggest_actions;
