use axum::Json;
use chrono::Utc;
use vibegit_types::{HealthResponse, RootResponse};

/// `GET /`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::at(Utc::now()))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok_at(Utc::now()))
}
