use crate::error::{AppError, AppResult};
use crate::sync::catalog::ServerCatalog;
use crate::sync::models::{ReconciliationEntry, ServerSummary};
use crate::sync::reconciler::AccountReconciler;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ServerCatalog>,
    pub reconciler: Arc<AccountReconciler>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

#[derive(Serialize)]
pub struct ServerListResponse {
    pub servers: Vec<ServerSummary>,
    pub total_count: usize,
}

/// GET /api/v1/servers - List hosting servers and their manager capabilities
pub async fn list_servers(
    State(state): State<AppState>,
) -> AppResult<Json<ServerListResponse>> {
    let servers = state.catalog.list_servers().await?;

    Ok(Json(ServerListResponse {
        total_count: servers.len(),
        servers,
    }))
}

#[derive(Serialize)]
pub struct ServerAvailabilityResponse {
    pub server_id: i64,
    pub available: bool,
}

/// GET /api/v1/servers/:id/availability - Probe the server's control panel
pub async fn get_server_availability(
    State(state): State<AppState>,
    Path(server_id): Path<i64>,
) -> AppResult<Json<ServerAvailabilityResponse>> {
    let available = state.catalog.check_availability(server_id).await?;

    Ok(Json(ServerAvailabilityResponse {
        server_id,
        available,
    }))
}

#[derive(Serialize)]
pub struct ServerAccountsResponse {
    pub server_id: i64,
    pub accounts: Vec<ReconciliationEntry>,
    pub total_count: usize,
}

/// GET /api/v1/servers/:id/accounts - Reconciliation report for one server
pub async fn get_server_accounts(
    State(state): State<AppState>,
    Path(server_id): Path<i64>,
) -> AppResult<Json<ServerAccountsResponse>> {
    if server_id <= 0 {
        return Err(AppError::InvalidInput(
            "The ID of the hosting server is required".to_string(),
        ));
    }

    info!("Reconciling accounts for server {}", server_id);
    let accounts = state.reconciler.reconcile(server_id).await?;

    Ok(Json(ServerAccountsResponse {
        server_id,
        total_count: accounts.len(),
        accounts,
    }))
}
