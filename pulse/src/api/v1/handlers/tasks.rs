//! v1 Task handlers.
//!
//! Listing always reflects the session's current mood: incomplete tasks come
//! back in recommendation order, completed ones after them.

use axum::extract::{Path, State};

use crate::api::v1::dto::{CreateTaskRequest, TaskListResponse, TaskResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ResponseMeta};
use crate::api::AppState;
use crate::intelligence::recommend;
use crate::intelligence::registry::task_advice_for;

use super::{load_session, parse_id};

/// `GET /api/v1/sessions/{sessionId}/tasks`
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{sessionId}/tasks",
    tag = "tasks",
    operation_id = "tasks.list",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Tasks ordered for the current mood", body = TaskListResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResponse<TaskListResponse> {
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();

    let mood = session.mood();
    let tasks = session.tasks();
    let recommended: Vec<TaskResponse> = recommend(mood, tasks.all())
        .iter()
        .map(Into::into)
        .collect();
    let completed: Vec<TaskResponse> = tasks.completed().map(Into::into).collect();
    let total = tasks.len() as u64;

    ApiResponse::success_with_meta(
        TaskListResponse {
            mood,
            advice: task_advice_for(mood).to_string(),
            recommended,
            completed,
        },
        ResponseMeta { total: Some(total) },
    )
}

/// `POST /api/v1/sessions/{sessionId}/tasks`
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/tasks",
    tag = "tasks",
    operation_id = "tasks.create",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Blank title or importance out of range", body = ApiError),
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    axum::Json(req): axum::Json<CreateTaskRequest>,
) -> ApiResponse<TaskResponse> {
    let input = match req.into_new_task() {
        Ok(input) => input,
        Err(e) => return e.into(),
    };
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.add_task(input) {
        Ok(task) => ApiResponse::created(task.into()),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/sessions/{sessionId}/tasks/{taskId}/toggle`
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{sessionId}/tasks/{taskId}/toggle",
    tag = "tasks",
    operation_id = "tasks.toggle",
    params(
        ("sessionId" = String, Path, description = "Session ID"),
        ("taskId" = String, Path, description = "Task ID"),
    ),
    responses(
        (status = 200, description = "Completion flipped", body = TaskResponse),
        (status = 404, description = "Task not found", body = ApiError),
    )
)]
pub async fn toggle_task(
    State(state): State<AppState>,
    Path((session_id, task_id)): Path<(String, String)>,
) -> ApiResponse<TaskResponse> {
    let task_id = match parse_id(&task_id, "task") {
        Ok(id) => id,
        Err(e) => return e.into(),
    };
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.toggle_task(task_id) {
        Ok(task) => ApiResponse::success(task.into()),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/sessions/{sessionId}/tasks/{taskId}`
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{sessionId}/tasks/{taskId}",
    tag = "tasks",
    operation_id = "tasks.delete",
    params(
        ("sessionId" = String, Path, description = "Session ID"),
        ("taskId" = String, Path, description = "Task ID"),
    ),
    responses(
        (status = 200, description = "Deleted task", body = TaskResponse),
        (status = 404, description = "Task not found", body = ApiError),
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path((session_id, task_id)): Path<(String, String)>,
) -> ApiResponse<TaskResponse> {
    let task_id = match parse_id(&task_id, "task") {
        Ok(id) => id,
        Err(e) => return e.into(),
    };
    let handle = match load_session(&state, &session_id).await {
        Ok(h) => h,
        Err(e) => return e.into(),
    };
    let mut session = handle.lock().await;
    session.touch();
    match session.delete_task(task_id) {
        Ok(task) => ApiResponse::success((&task).into()),
        Err(e) => e.into(),
    }
}
