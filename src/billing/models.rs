use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status shared by billing orders and remote panel accounts.
///
/// Panel adapters normalize whatever the control panel reports into this
/// enum so order and remote statuses can be compared directly.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "service_status", rename_all = "snake_case")]
pub enum ServiceStatus {
    PendingSetup,
    Active,
    Suspended,
    Canceled,
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchased service and its lifecycle status. `service_id` points at the
/// row of the concrete service table (`hosting_accounts` for hosting orders)
/// and is null until the order has been activated.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ClientOrder {
    pub id: i64,
    pub client_id: i64,
    pub service_type: String,
    pub service_id: Option<i64>,
    pub title: String,
    pub status: ServiceStatus,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A configured remote hosting server. `manager` names the server-manager
/// kind registered in the `ManagerRegistry`; the credential columns are
/// interpreted by that manager's factory.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct HostingServer {
    pub id: i64,
    pub name: String,
    pub hostname: String,
    pub ip: Option<String>,
    pub manager: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_token: Option<String>,
    pub port: Option<i32>,
    pub secure: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Billing-side record of a hosting account living on one of the servers.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct HostingAccount {
    pub id: i64,
    pub client_id: i64,
    pub server_id: i64,
    pub username: String,
    pub domain: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::PendingSetup).unwrap(),
            "\"pending_setup\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Suspended).unwrap(),
            "\"suspended\""
        );
    }

    #[test]
    fn service_status_round_trips() {
        let status: ServiceStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, ServiceStatus::Active);
    }
}
