//! v1 Companion overlay handlers.
//!
//! The companion is a side channel: it rewrites the session's mood without
//! touching the current view.

use axum::extract::{Path, State};

use crate::api::v1::dto::{CompanionResponse, MoodRequest};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::intelligence::companion_card;
use crate::models::Mood;

use super::load_session;

/// `GET /api/v1/sessions/{sessionId}/companion`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}/companion",
    tag = "companion",
    operation_id = "companion.get",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Companion card for the current mood", body = CompanionResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_companion(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<CompanionResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    ApiResponse::success(companion_card(session.mood()).into())
}

/// `POST /api/v1/sessions/{sessionId}/companion`
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/companion",
    tag = "companion",
    operation_id = "companion.updateMood",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = MoodRequest,
    responses(
        (status = 200, description = "Mood updated", body = CompanionResponse),
        (status = 400, description = "Unknown mood key", body = ApiError),
        (status = 409, description = "Onboarding not complete", body = ApiError),
    )
)]
pub async fn update_companion_mood(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    axum::Json(req): axum::Json<MoodRequest>,
) -> ApiResponse<CompanionResponse> {
    let mood: Mood = match req.mood.parse() {
        Ok(m) => m,
        Err(e) => return e.into(),
    };
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.update_mood(mood) {
        Ok(mood) => ApiResponse::success(companion_card(mood).into()),
        Err(e) => e.into(),
    }
}
