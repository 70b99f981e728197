use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let moods = Router::new()
        .route("/", get(handlers::moods::list_moods))
        .route("/{key}", get(handlers::moods::get_mood));

    let onboarding = Router::new()
        .route(
            "/",
            get(handlers::onboarding::get_onboarding)
                .patch(handlers::onboarding::update_onboarding),
        )
        .route("/next", post(handlers::onboarding::onboarding_next))
        .route("/back", post(handlers::onboarding::onboarding_back))
        .route("/finish", post(handlers::onboarding::onboarding_finish));

    let mood = Router::new()
        .route("/", post(handlers::mood::confirm_mood))
        .route("/select", post(handlers::mood::select_mood))
        .route("/analyze", post(handlers::mood::analyze))
        .route("/accept", post(handlers::mood::accept_detected));

    let tasks = Router::new()
        .route(
            "/",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/{taskId}",
            axum::routing::delete(handlers::tasks::delete_task),
        )
        .route("/{taskId}/toggle", post(handlers::tasks::toggle_task));

    let suggestions = Router::new()
        .route("/", get(handlers::suggestions::get_suggestions))
        .route("/refresh", post(handlers::suggestions::refresh_suggestions))
        .route(
            "/tasks/{templateId}/toggle",
            post(handlers::suggestions::toggle_suggested_task),
        )
        .route(
            "/nudges/{index}/toggle",
            post(handlers::suggestions::toggle_nudge),
        );

    let session = Router::new()
        .route(
            "/",
            get(handlers::sessions::get_session).delete(handlers::sessions::delete_session),
        )
        .route("/start", post(handlers::sessions::start_session))
        .route("/navigate", post(handlers::sessions::navigate))
        .route("/profile", get(handlers::sessions::get_profile))
        .route(
            "/companion",
            get(handlers::companion::get_companion)
                .post(handlers::companion::update_companion_mood),
        )
        .route("/insights", get(handlers::insights::get_insights))
        .nest("/onboarding", onboarding)
        .nest("/mood", mood)
        .nest("/tasks", tasks)
        .nest("/suggestions", suggestions);

    let sessions = Router::new()
        .route("/", post(handlers::sessions::create_session))
        .nest("/{sessionId}", session);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .nest("/moods", moods)
        .nest("/sessions", sessions)
}
