use crate::{
    adapters::{
        panels::{CpanelFactory, CustomFactory, DirectAdminFactory},
        registry::ManagerRegistry,
    },
    billing::repository::{BillingRepository, PgBillingRepository},
    error::AppResult,
    sync::{catalog::ServerCatalog, handlers::AppState, reconciler::AccountReconciler},
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{sync::Arc, time::Duration};
use tracing::info;

pub async fn initialize_app_state(database_url: &str) -> AppResult<AppState> {
    info!("Initializing application components ...");

    let pool = initialize_database(database_url).await?;

    let billing: Arc<dyn BillingRepository> = Arc::new(PgBillingRepository::new(pool));

    info!("⚙️  Registering server managers...");
    let mut registry = ManagerRegistry::new();
    registry.register(Arc::new(CpanelFactory));
    registry.register(Arc::new(DirectAdminFactory));
    registry.register(Arc::new(CustomFactory));
    let registry = Arc::new(registry);
    info!("✅ Server managers available: {:?}", registry.kinds());

    let catalog = Arc::new(ServerCatalog::new(billing.clone(), registry.clone()));
    let reconciler = Arc::new(AccountReconciler::new(billing, registry));

    Ok(AppState {
        catalog,
        reconciler,
    })
}

async fn initialize_database(database_url: &str) -> AppResult<PgPool> {
    info!("📊 Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url)
        .await?;

    info!("🔄 Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    info!("✓ Database initialized");
    Ok(pool)
}
