pub mod panels;
pub mod registry;
pub mod traits;

pub use registry::ManagerRegistry;
pub use traits::{AccountLister, FormField, ManagerFactory, ManagerForm, RemoteAccount, ServerManager};
