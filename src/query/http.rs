//! axum transport for the cars endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::{CarQuery, CarsEndpoint};

pub const CARS_ROUTE: &str = "/api/cars";
pub const HEALTH_ROUTE: &str = "/health";

/// Build an axum `Router` serving the cars endpoint.
pub fn router(endpoint: Arc<CarsEndpoint>) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(health_handler))
        .route(CARS_ROUTE, get(cars_handler))
        .with_state(endpoint)
}

/// Serve the endpoint over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(endpoint: Arc<CarsEndpoint>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(endpoint);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving cars endpoint");
    axum::serve(listener, app).await
}

/// `GET /health` — returns `{ "ok": true, "cars": <catalog size> }`.
async fn health_handler(State(endpoint): State<Arc<CarsEndpoint>>) -> impl IntoResponse {
    Json(json!({ "ok": true, "cars": endpoint.catalog().len() }))
}

/// `GET /api/cars` — decoded as raw pairs so repeated or unknown keys never
/// turn into a rejection.
async fn cars_handler(
    State(endpoint): State<Arc<CarsEndpoint>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let response = endpoint.handle(&CarQuery::from_pairs(pairs));
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (status, Json(response.cars))
}
