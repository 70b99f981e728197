//! v1 Session handlers.
//!
//! Session lifecycle plus the top-level view transitions: Get Started and
//! lateral navigation between mood capture, tasks and insights.

use axum::extract::{Path, State};

use crate::api::v1::dto::{
    NavigateRequest, ProfileResponse, SessionEndedResponse, SessionResponse, ViewResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

use super::{load_session, parse_id};

/// `POST /api/v1/sessions`
///
/// Opens a new session on the splash view with a neutral mood.
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    tag = "sessions",
    operation_id = "sessions.create",
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
    )
)]
pub async fn create_session(State(state): State<AppState>) -> ApiResponse<SessionResponse> {
    let (_, handle) = state.sessions.create().await;
    let session = handle.lock().await;
    ApiResponse::created(SessionResponse::from(&*session))
}

/// `GET /api/v1/sessions/{sessionId}`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}",
    tag = "sessions",
    operation_id = "sessions.get",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
        (status = 400, description = "Malformed session ID", body = ApiError),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<SessionResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    ApiResponse::success(SessionResponse::from(&*session))
}

/// `DELETE /api/v1/sessions/{sessionId}`
///
/// Ends the session. Its tasks are discarded with it.
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{sessionId}",
    tag = "sessions",
    operation_id = "sessions.delete",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session ended", body = SessionEndedResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<SessionEndedResponse> {
    let id = match parse_id(&session_id, "session") {
        Ok(id) => id,
        Err(e) => return e.into(),
    };
    let handle = match state.sessions.get(id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let discarded_tasks = handle.lock().await.tasks().len();

    if let Err(e) = state.sessions.remove(id).await {
        return e.into();
    }
    ApiResponse::success(SessionEndedResponse {
        id,
        discarded_tasks,
    })
}

/// `POST /api/v1/sessions/{sessionId}/start`
///
/// Splash to onboarding.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/start",
    tag = "sessions",
    operation_id = "sessions.start",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Onboarding started", body = ViewResponse),
        (status = 409, description = "Session already started", body = ApiError),
    )
)]
pub async fn start_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<ViewResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.start() {
        Ok(view) => ApiResponse::success(ViewResponse {
            view,
            mood: session.mood(),
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/sessions/{sessionId}/navigate`
///
/// Lateral move between mood capture, tasks and insights. Only allowed once
/// onboarding is complete.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/navigate",
    tag = "sessions",
    operation_id = "sessions.navigate",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "View changed", body = ViewResponse),
        (status = 409, description = "Navigation not available", body = ApiError),
    )
)]
pub async fn navigate(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    axum::Json(req): axum::Json<NavigateRequest>,
) -> ApiResponse<ViewResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.navigate(req.view) {
        Ok(view) => ApiResponse::success(ViewResponse {
            view,
            mood: session.mood(),
        }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/sessions/{sessionId}/profile`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}/profile",
    tag = "sessions",
    operation_id = "sessions.profile",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Committed profile", body = ProfileResponse),
        (status = 404, description = "Session not found or onboarding not finished", body = ApiError),
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<ProfileResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.profile() {
        Some(profile) => ApiResponse::success(profile.into()),
        None => ApiResponse::error(ErrorCode::NotFound, "Onboarding has not been completed"),
    }
}
