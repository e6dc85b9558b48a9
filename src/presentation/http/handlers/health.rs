use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    service: &'static str,
    version: &'static str,
    status: &'static str,
    database: &'static str,
}

/// Liveness plus a database round-trip. Reports 503 when the store is
/// unreachable so load balancers stop routing moderation traffic here.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_up = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => true,
        Err(err) => {
            tracing::error!(error = %err, "health probe could not reach database");
            false
        }
    };

    let response = HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: if database_up { "healthy" } else { "unhealthy" },
        database: if database_up { "up" } else { "down" },
    };
    let code = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
