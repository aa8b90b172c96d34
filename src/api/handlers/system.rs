//! System health and greeting handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{MessageResponse, messages};
use crate::api::AppState;
use crate::db::Database;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
    /// Whether the database answered the probe
    #[schema(example = true)]
    pub database: bool,
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/api",
    tag = "system",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(messages::BEM_VINDO))
}

/// Health check endpoint
///
/// Probes the database; answers 503 when it is unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database>(
    State(state): State<AppState<D>>,
) -> (StatusCode, Json<HealthResponse>) {
    if state.db().probe().await {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                database: true,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable".to_string(),
                database: false,
            }),
        )
    }
}
