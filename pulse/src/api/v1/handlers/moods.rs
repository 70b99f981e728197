//! v1 Mood registry handlers.

use axum::extract::Path;

use crate::api::v1::dto::MoodResponse;
use crate::api::v1::response::{ApiResponse, ResponseMeta};
use crate::intelligence::{metadata_for, metadata_for_key};
use crate::models::Mood;

/// `GET /api/v1/moods`
#[utoipa::path(
    get,
    path = "/api/v1/moods",
    tag = "moods",
    operation_id = "moods.list",
    responses(
        (status = 200, description = "All ten moods in display order", body = Vec<MoodResponse>),
    )
)]
pub async fn list_moods() -> ApiResponse<Vec<MoodResponse>> {
    let moods: Vec<MoodResponse> = Mood::ALL
        .into_iter()
        .map(|mood| metadata_for(mood).into())
        .collect();
    let total = moods.len() as u64;
    ApiResponse::success_with_meta(moods, ResponseMeta { total: Some(total) })
}

/// `GET /api/v1/moods/{key}`
///
/// Unknown keys resolve to the neutral entry rather than 404.
#[utoipa::path(
    get,
    path = "/api/v1/moods/{key}",
    tag = "moods",
    operation_id = "moods.get",
    params(("key" = String, Path, description = "Mood key, e.g. `focused`")),
    responses(
        (status = 200, description = "Mood metadata", body = MoodResponse),
    )
)]
pub async fn get_mood(Path(key): Path<String>) -> ApiResponse<MoodResponse> {
    ApiResponse::success(metadata_for_key(&key).into())
}
