use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub classifier: ClassifierStatus,
    pub active_sessions: usize,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ClassifierStatus {
    pub status: String,
    pub backend: String,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let classifier = ClassifierStatus {
        status: if state.classifier.is_available() {
            "available".to_string()
        } else {
            "unavailable".to_string()
        },
        backend: state.classifier.backend_name().to_string(),
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        classifier,
        active_sessions: state.sessions.len().await,
    })
}
