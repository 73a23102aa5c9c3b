use crate::middleware::{create_cors_layer, rate_limit_middleware};
use crate::sync::handlers::{
    get_server_accounts, get_server_availability, health_check, list_servers, AppState,
};
use axum::{
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::info;

pub async fn create_app(state: AppState) -> Router {
    info!("⚙️ Setting up HTTP routes...");

    let app = Router::new()
        // Public health check endpoint
        .route("/health", get(health_check))
        // Admin reconciliation API
        .nest(
            "/api/v1",
            Router::new()
                .route("/servers", get(list_servers))
                .route("/servers/:id/availability", get(get_server_availability))
                .route("/servers/:id/accounts", get(get_server_accounts))
                .layer(axum::middleware::from_fn(rate_limit_middleware)),
        )
        .layer(CompressionLayer::new())
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("✓ HTTP routes configured");
    app
}

pub async fn run_server(
    app: Router,
    bind_address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("🌐 Server listening on: {}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
