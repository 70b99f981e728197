//! v1 Daily plan handlers.

use std::time::Duration;

use axum::extract::{Path, State};

use crate::api::v1::dto::{
    NudgeResponse, SuggestedTaskResponse, SuggestionsResponse, ToggleResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::intelligence::{metadata_for, productivity_tips, tasks_for_mood, WELLNESS_NUDGES};
use crate::session::{refresh_plan, Session};

use super::load_session;

fn plan_response(session: &Session) -> SuggestionsResponse {
    let mood = session.mood();
    let plan = session.plan();
    // Detected intensity when there is one, the palette default otherwise.
    let intensity = session
        .capture()
        .detected
        .as_ref()
        .map(|d| d.intensity)
        .unwrap_or(metadata_for(mood).palette.intensity);

    SuggestionsResponse {
        mood,
        refreshing: plan.is_refreshing(),
        tasks: tasks_for_mood(mood)
            .iter()
            .map(|t| SuggestedTaskResponse::new(t, plan))
            .collect(),
        nudges: WELLNESS_NUDGES
            .iter()
            .enumerate()
            .map(|(i, n)| NudgeResponse::new(i, n, plan))
            .collect(),
        tips: productivity_tips(mood, intensity)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// `GET /api/v1/sessions/{sessionId}/suggestions`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}/suggestions",
    tag = "suggestions",
    operation_id = "suggestions.get",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Daily plan for the current mood", body = SuggestionsResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<SuggestionsResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    ApiResponse::success(plan_response(&session))
}

/// `POST /api/v1/sessions/{sessionId}/suggestions/refresh`
///
/// Waits for the configured refresh delay, then clears every tick.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/suggestions/refresh",
    tag = "suggestions",
    operation_id = "suggestions.refresh",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Plan refreshed", body = SuggestionsResponse),
        (status = 409, description = "A refresh is already running", body = ApiError),
    )
)]
pub async fn refresh_suggestions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<SuggestionsResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let delay = Duration::from_millis(state.config.suggestions.refresh_delay_ms);
    if let Err(e) = refresh_plan(&handle, delay).await {
        return e.into();
    }
    let session = handle.lock().await;
    ApiResponse::success(plan_response(&session))
}

/// `POST /api/v1/sessions/{sessionId}/suggestions/tasks/{templateId}/toggle`
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/suggestions/tasks/{templateId}/toggle",
    tag = "suggestions",
    operation_id = "suggestions.toggleTask",
    params(
        ("sessionId" = String, Path, description = "Session ID"),
        ("templateId" = String, Path, description = "Suggested task ID"),
    ),
    responses(
        (status = 200, description = "Tick flipped", body = ToggleResponse),
        (status = 404, description = "Not part of the current plan", body = ApiError),
    )
)]
pub async fn toggle_suggested_task(
    State(state): State<AppState>,
    Path((session_id, template_id)): Path<(String, String)>,
) -> ApiResponse<ToggleResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.toggle_template(&template_id) {
        Ok(completed) => ApiResponse::success(ToggleResponse {
            id: template_id,
            completed,
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/sessions/{sessionId}/suggestions/nudges/{index}/toggle`
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/suggestions/nudges/{index}/toggle",
    tag = "suggestions",
    operation_id = "suggestions.toggleNudge",
    params(
        ("sessionId" = String, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Nudge position, 0-based"),
    ),
    responses(
        (status = 200, description = "Tick flipped", body = ToggleResponse),
        (status = 404, description = "No such nudge", body = ApiError),
    )
)]
pub async fn toggle_nudge(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(String, usize)>,
) -> ApiResponse<ToggleResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.toggle_nudge(index) {
        Ok(completed) => ApiResponse::success(ToggleResponse {
            id: index.to_string(),
            completed,
        }),
        Err(e) => e.into(),
    }
}
