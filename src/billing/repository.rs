use crate::billing::models::{Client, ClientOrder, HostingAccount, HostingServer};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// Read-only access to the billing database.
///
/// The reconciliation core receives this as an explicit constructor
/// dependency so tests can substitute an in-memory implementation.
#[async_trait]
pub trait BillingRepository: Send + Sync {
    /// All active hosting servers as `(id, name)` pairs, id order.
    async fn get_server_pairs(&self) -> AppResult<Vec<(i64, String)>>;

    /// Resolves a server id to its row, failing with `NotFound` if absent.
    async fn get_server_by_id(&self, server_id: i64) -> AppResult<HostingServer>;

    async fn find_account_by_server_and_username(
        &self,
        server_id: i64,
        username: &str,
    ) -> AppResult<Option<HostingAccount>>;

    async fn find_order_for_service(
        &self,
        service_type: &str,
        service_id: i64,
    ) -> AppResult<Option<ClientOrder>>;

    async fn find_client_by_id(&self, client_id: i64) -> AppResult<Option<Client>>;

    async fn find_client_by_email(&self, email: &str) -> AppResult<Option<Client>>;
}

pub struct PgBillingRepository {
    pool: PgPool,
}

impl PgBillingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BillingRepository for PgBillingRepository {
    async fn get_server_pairs(&self) -> AppResult<Vec<(i64, String)>> {
        let pairs = sqlx::query_as::<_, (i64, String)>(
            r#"
            SELECT id, name
            FROM hosting_servers
            WHERE active = true
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pairs)
    }

    async fn get_server_by_id(&self, server_id: i64) -> AppResult<HostingServer> {
        let server = sqlx::query_as::<_, HostingServer>(
            r#"
            SELECT id, name, hostname, ip, manager, username, password, api_token,
                   port, secure, active, created_at, updated_at
            FROM hosting_servers
            WHERE id = $1
            "#,
        )
        .bind(server_id)
        .fetch_optional(&self.pool)
        .await?;

        server.ok_or_else(|| AppError::NotFound("Server not found".to_string()))
    }

    async fn find_account_by_server_and_username(
        &self,
        server_id: i64,
        username: &str,
    ) -> AppResult<Option<HostingAccount>> {
        let account = sqlx::query_as::<_, HostingAccount>(
            r#"
            SELECT id, client_id, server_id, username, domain, created_at, updated_at
            FROM hosting_accounts
            WHERE server_id = $1 AND username = $2
            "#,
        )
        .bind(server_id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_order_for_service(
        &self,
        service_type: &str,
        service_id: i64,
    ) -> AppResult<Option<ClientOrder>> {
        let order = sqlx::query_as::<_, ClientOrder>(
            r#"
            SELECT id, client_id, service_type, service_id, title, status, price,
                   created_at, updated_at
            FROM client_orders
            WHERE service_type = $1 AND service_id = $2
            "#,
        )
        .bind(service_type)
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    async fn find_client_by_id(&self, client_id: i64) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, email, first_name, last_name, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    async fn find_client_by_email(&self, email: &str) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, email, first_name, last_name, created_at, updated_at
            FROM clients
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }
}
