use axum::http::StatusCode;

/// Liveness check
pub async fn health_check() -> (StatusCode, String) {
    (StatusCode::OK, "Healthy!".to_string())
}
