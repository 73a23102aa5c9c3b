use axum::{
    http::HeaderValue,
    http::{header, Method},
};
use tower_http::cors::CorsLayer;

/// CORS for the admin panel frontend. The reconciliation API is read-only,
/// so only GET (plus preflight) is allowed.
pub fn create_cors_layer() -> CorsLayer {
    let allowed_origins = vec![
        "http://localhost:3000".parse::<HeaderValue>().unwrap(),
        "https://admin.serversync.local".parse::<HeaderValue>().unwrap(),
    ];

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(60 * 60))
}
