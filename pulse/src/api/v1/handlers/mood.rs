//! v1 Mood capture handlers.
//!
//! A mood is either picked on the grid (`select`, then `confirm`) or detected
//! from an uploaded image (`analyze`, then `accept`). Confirming writes the
//! session's shared mood and moves on to the task view.

use axum::body::Bytes;
use axum::extract::{Path, State};

use crate::api::v1::dto::{AnalyzeResponse, MoodRequest, SessionResponse, ViewResponse};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::intelligence::productivity_tips;
use crate::models::Mood;
use crate::session::analyze_mood;

use super::load_session;

/// `POST /api/v1/sessions/{sessionId}/mood/select`
///
/// Highlights a mood on the grid without confirming it.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/mood/select",
    tag = "mood",
    operation_id = "mood.select",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = MoodRequest,
    responses(
        (status = 200, description = "Selection recorded", body = SessionResponse),
        (status = 400, description = "Unknown mood key", body = ApiError),
        (status = 409, description = "Not on the mood capture view", body = ApiError),
    )
)]
pub async fn select_mood(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    axum::Json(req): axum::Json<MoodRequest>,
) -> ApiResponse<SessionResponse> {
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
    if let Err(e) = session.select_mood(mood) {
        return e.into();
    }
    ApiResponse::success(SessionResponse::from(&*session))
}

/// `POST /api/v1/sessions/{sessionId}/mood`
///
/// Confirms a mood and moves to the task view.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/mood",
    tag = "mood",
    operation_id = "mood.confirm",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = MoodRequest,
    responses(
        (status = 200, description = "Mood confirmed", body = ViewResponse),
        (status = 400, description = "Unknown mood key", body = ApiError),
        (status = 409, description = "Not on the mood capture view", body = ApiError),
    )
)]
pub async fn confirm_mood(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    axum::Json(req): axum::Json<MoodRequest>,
) -> ApiResponse<ViewResponse> {
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
    match session.confirm_mood(mood) {
        Ok(view) => ApiResponse::success(ViewResponse { view, mood }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/sessions/{sessionId}/mood/analyze`
///
/// Classifies the raw image in the request body. Analysis never fails: an
/// unreadable image or a classifier error yields the fallback result, marked
/// with `isFallback`.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/mood/analyze",
    tag = "mood",
    operation_id = "mood.analyze",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Detected emotion", body = AnalyzeResponse),
        (status = 409, description = "Not on the mood capture view, or an analysis is already running", body = ApiError),
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Bytes,
) -> ApiResponse<AnalyzeResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };

    tracing::debug!(session_id = %session_id, bytes = body.len(), "Analyzing mood image");
    let result = match analyze_mood(&handle, &state.classifier, &body).await {
        Ok(result) => result,
        Err(e) => return e.into(),
    };

    let tips = productivity_tips(result.emotion, result.intensity)
        .into_iter()
        .map(str::to_string)
        .collect();
    ApiResponse::success(AnalyzeResponse {
        result: result.into(),
        tips,
    })
}

/// `POST /api/v1/sessions/{sessionId}/mood/accept`
///
/// Confirms the mood detected by the last analysis.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/mood/accept",
    tag = "mood",
    operation_id = "mood.accept",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Detected mood confirmed", body = ViewResponse),
        (status = 409, description = "Nothing detected yet", body = ApiError),
    )
)]
pub async fn accept_detected(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<ViewResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.accept_detected() {
        Ok(view) => ApiResponse::success(ViewResponse {
            view,
            mood: session.mood(),
        }),
        Err(e) => e.into(),
    }
}
