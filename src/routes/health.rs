use crate::models::responses::{HealthResponse, WelcomeResponse};
use axum::response::Json;
use chrono::Utc;

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the library!".to_string(),
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "library-service".to_string(),
        status: "running".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}
