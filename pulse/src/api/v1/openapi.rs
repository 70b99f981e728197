use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pulse API",
        version = "1.0.0",
        description = "Mood-aware task planning. Capture a mood, get tasks ordered for it.",
    ),
    paths(
        handlers::health::health_check,
        handlers::moods::list_moods,
        handlers::moods::get_mood,
        handlers::sessions::create_session,
        handlers::sessions::get_session,
        handlers::sessions::delete_session,
        handlers::sessions::start_session,
        handlers::sessions::navigate,
        handlers::sessions::get_profile,
        handlers::onboarding::get_onboarding,
        handlers::onboarding::update_onboarding,
        handlers::onboarding::onboarding_next,
        handlers::onboarding::onboarding_back,
        handlers::onboarding::onboarding_finish,
        handlers::mood::select_mood,
        handlers::mood::confirm_mood,
        handlers::mood::analyze,
        handlers::mood::accept_detected,
        handlers::companion::get_companion,
        handlers::companion::update_companion_mood,
        handlers::tasks::list_tasks,
        handlers::tasks::create_task,
        handlers::tasks::toggle_task,
        handlers::tasks::delete_task,
        handlers::suggestions::get_suggestions,
        handlers::suggestions::refresh_suggestions,
        handlers::suggestions::toggle_suggested_task,
        handlers::suggestions::toggle_nudge,
        handlers::insights::get_insights,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Moods
        crate::models::Mood,
        dto::moods::MoodResponse,
        dto::moods::MoodRequest,
        dto::moods::CompanionResponse,
        // Sessions
        crate::flow::View,
        dto::sessions::SessionResponse,
        dto::sessions::SessionEndedResponse,
        dto::sessions::CaptureResponse,
        dto::sessions::EmotionResponse,
        dto::sessions::AnalyzeResponse,
        dto::sessions::NavigateRequest,
        dto::sessions::ViewResponse,
        // Onboarding
        crate::flow::OnboardingStep,
        dto::onboarding::UpdateOnboardingRequest,
        dto::onboarding::SwatchUpdate,
        dto::onboarding::SwatchResponse,
        dto::onboarding::PaletteResponse,
        dto::onboarding::CycleTrackingResponse,
        dto::onboarding::DraftResponse,
        dto::onboarding::OnboardingResponse,
        dto::onboarding::ProfileResponse,
        // Tasks
        crate::models::TaskCategory,
        crate::models::EstimatedTime,
        dto::tasks::CreateTaskRequest,
        dto::tasks::TaskResponse,
        dto::tasks::TaskListResponse,
        // Suggestions
        crate::intelligence::suggestions::Priority,
        dto::suggestions::SuggestedTaskResponse,
        dto::suggestions::NudgeResponse,
        dto::suggestions::SuggestionsResponse,
        dto::suggestions::ToggleResponse,
        // Insights
        dto::insights::DayActivityResponse,
        dto::insights::InsightResponse,
        dto::insights::WeeklySummaryResponse,
        dto::insights::DashboardResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::ClassifierStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "moods", description = "Mood registry"),
        (name = "sessions", description = "Session lifecycle and navigation"),
        (name = "onboarding", description = "Five-step profile wizard"),
        (name = "mood", description = "Mood selection and image analysis"),
        (name = "companion", description = "Companion overlay and side-channel mood updates"),
        (name = "tasks", description = "User tasks ordered by mood"),
        (name = "suggestions", description = "Daily plan of suggested tasks and wellness nudges"),
        (name = "insights", description = "Insights dashboard"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
