//! Daily plan DTOs for the v1 API.

use serde::Serialize;

use crate::intelligence::suggestions::{Priority, TaskTemplate, WellnessNudge};
use crate::models::Mood;
use crate::session::DailyPlan;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedTaskResponse {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    /// Display string, e.g. `"25 min"`.
    pub estimated: String,
    pub completed: bool,
}

impl SuggestedTaskResponse {
    pub fn new(template: &TaskTemplate, plan: &DailyPlan) -> Self {
        Self {
            id: template.id.to_string(),
            title: template.title.to_string(),
            priority: template.priority,
            estimated: template.estimated.to_string(),
            completed: plan.template_done(template.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NudgeResponse {
    pub index: usize,
    pub text: String,
    pub action: String,
    pub completed: bool,
}

impl NudgeResponse {
    pub fn new(index: usize, nudge: &WellnessNudge, plan: &DailyPlan) -> Self {
        Self {
            index,
            text: nudge.text.to_string(),
            action: nudge.action.to_string(),
            completed: plan.nudge_done(index),
        }
    }
}

/// Response for `GET /sessions/{id}/suggestions`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub mood: Mood,
    pub refreshing: bool,
    pub tasks: Vec<SuggestedTaskResponse>,
    pub nudges: Vec<NudgeResponse>,
    pub tips: Vec<String>,
}

/// Tick state after a toggle.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub id: String,
    pub completed: bool,
}
