use axum::extract::{Path, State};

use crate::api::v1::dto::DashboardResponse;
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::intelligence::dashboard;

use super::load_session;

/// `GET /api/v1/sessions/{sessionId}/insights`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}/insights",
    tag = "insights",
    operation_id = "insights.get",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Insights dashboard", body = DashboardResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_insights(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<DashboardResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    ApiResponse::success(dashboard(session.mood()).into())
}
