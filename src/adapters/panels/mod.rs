pub mod cpanel;
pub mod custom;
pub mod directadmin;

pub use cpanel::{CpanelFactory, CpanelManager};
pub use custom::{CustomFactory, CustomManager};
pub use directadmin::{DirectAdminFactory, DirectAdminManager};
