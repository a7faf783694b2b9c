mod error;
mod rest;
mod types;

pub use error::{ApiError, ApiResult};
pub use rest::RestApi;
pub use types::*;

use crate::metrics::metrics_route;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the complete HTTP server: range endpoints, metrics and request tracing
pub fn create_api_server() -> Router {
    Router::new()
        .merge(RestApi::router())
        .route("/metrics", metrics_route())
        .layer(TraceLayer::new_for_http())
}
