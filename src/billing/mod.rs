pub mod models;
pub mod repository;

pub use models::{Client, ClientOrder, HostingAccount, HostingServer, ServiceStatus};
pub use repository::{BillingRepository, PgBillingRepository};
