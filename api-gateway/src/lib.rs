pub mod app_state;
pub mod attraction_service;
pub mod error;
pub mod google_maps_client;
pub mod handlers;
pub mod logging;
pub mod middleware;

use axum::{middleware as axum_middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use app_state::AppState;
pub use attraction_service::{AttractionService, SearchDefaults};
pub use error::ApiError;
pub use google_maps_client::{GoogleMapsClient, PlacesProvider};

use handlers::{attractions::attraction_routes, health::health_routes};
use middleware::request_logging;

/// Builds the router with all routes and middleware applied.
pub fn create_app(app_state: AppState) -> Router {
    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(axum_middleware::from_fn(request_logging))
        .into_inner();

    Router::new()
        .merge(health_routes())
        .merge(attraction_routes())
        .layer(middleware_layer)
        .with_state(app_state)
}
