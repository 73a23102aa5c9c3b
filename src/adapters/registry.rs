use crate::adapters::traits::{ManagerFactory, ServerManager};
use crate::billing::models::HostingServer;
use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Registry of server-manager factories, keyed by manager kind.
pub struct ManagerRegistry {
    factories: HashMap<&'static str, Arc<dyn ManagerFactory>>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, factory: Arc<dyn ManagerFactory>) {
        info!("Registering server manager: {}", factory.kind());
        self.factories.insert(factory.kind(), factory);
    }

    /// Builds the manager for a server row, failing if the row names a
    /// manager kind nothing has registered.
    pub fn manager_for(&self, server: &HostingServer) -> AppResult<Arc<dyn ServerManager>> {
        let factory = self.factories.get(server.manager.as_str()).ok_or_else(|| {
            AppError::Config(format!(
                "server '{}' references unknown manager kind '{}'",
                server.name, server.manager
            ))
        })?;

        factory.create(server)
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<&'static str> = self.factories.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ManagerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
