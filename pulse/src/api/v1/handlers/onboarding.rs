//! v1 Onboarding handlers.
//!
//! Thin wrappers over the session's wizard. Every call requires the session
//! to be on the onboarding view.

use axum::extract::{Path, State};

use crate::api::v1::dto::{OnboardingResponse, ProfileResponse, UpdateOnboardingRequest};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

use super::load_session;

/// `GET /api/v1/sessions/{sessionId}/onboarding`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}/onboarding",
    tag = "onboarding",
    operation_id = "onboarding.get",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Wizard state", body = OnboardingResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_onboarding(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<OnboardingResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    ApiResponse::success(session.onboarding().into())
}

/// `PATCH /api/v1/sessions/{sessionId}/onboarding`
///
/// Merges a partial update into the draft. A rejected update leaves the
/// draft untouched.
#[utoipa::path(
    patch,
    path = "/api/v1/sessions/{sessionId}/onboarding",
    tag = "onboarding",
    operation_id = "onboarding.update",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = UpdateOnboardingRequest,
    responses(
        (status = 200, description = "Draft updated", body = OnboardingResponse),
        (status = 400, description = "Field out of range", body = ApiError),
        (status = 409, description = "Session is not onboarding", body = ApiError),
    )
)]
pub async fn update_onboarding(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    axum::Json(req): axum::Json<UpdateOnboardingRequest>,
) -> ApiResponse<OnboardingResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    if let Err(e) = session.patch_onboarding(req.into()) {
        return e.into();
    }
    ApiResponse::success(session.onboarding().into())
}

/// `POST /api/v1/sessions/{sessionId}/onboarding/next`
///
/// Advances when the current step is complete. An incomplete step is not an
/// error: the response reports `moved: false`.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/onboarding/next",
    tag = "onboarding",
    operation_id = "onboarding.next",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Wizard state after the attempt", body = OnboardingResponse),
        (status = 409, description = "Session is not onboarding", body = ApiError),
    )
)]
pub async fn onboarding_next(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<OnboardingResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    let advance = match session.onboarding_next() {
        Ok(advance) => advance,
        Err(e) => return e.into(),
    };

    let mut resp = OnboardingResponse::from(session.onboarding());
    resp.moved = Some(advance.moved());
    ApiResponse::success(resp)
}

/// `POST /api/v1/sessions/{sessionId}/onboarding/back`
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/onboarding/back",
    tag = "onboarding",
    operation_id = "onboarding.back",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Wizard state", body = OnboardingResponse),
        (status = 409, description = "Session is not onboarding", body = ApiError),
    )
)]
pub async fn onboarding_back(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<OnboardingResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    if let Err(e) = session.onboarding_back() {
        return e.into();
    }
    ApiResponse::success(session.onboarding().into())
}

/// `POST /api/v1/sessions/{sessionId}/onboarding/finish`
///
/// Commits the profile from the summary step and moves the session to mood
/// capture.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/onboarding/finish",
    tag = "onboarding",
    operation_id = "onboarding.finish",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Profile committed", body = ProfileResponse),
        (status = 409, description = "Not on the summary step", body = ApiError),
    )
)]
pub async fn onboarding_finish(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<ProfileResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.finish_onboarding() {
        Ok(profile) => ApiResponse::success(profile.into()),
        Err(e) => e.into(),
    }
}
