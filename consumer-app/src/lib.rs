pub mod api;
pub mod pages;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Build the Axum router with all routes
pub fn build_router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health))
        .route("/example", get(api::get_example));

    Router::new()
        .route("/", get(pages::home))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
