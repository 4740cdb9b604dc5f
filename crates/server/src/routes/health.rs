use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use common::types::{Health, ServiceDescriptor, ServiceInfo};

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health(State(descriptor): State<&'static ServiceDescriptor>) -> Json<Health> {
    Json(descriptor.health())
}

#[utoipa::path(
    get, path = "/", tag = "health",
    responses((status = 200, description = "Service name, version and endpoint map"))
)]
pub async fn root(State(descriptor): State<&'static ServiceDescriptor>) -> Json<ServiceInfo> {
    Json(descriptor.info())
}

/// Prometheus text exposition of the default registry.
pub async fn metrics() -> impl IntoResponse {
    common::metrics::encode_metrics()
}
