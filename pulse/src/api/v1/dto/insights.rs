//! Insights dashboard DTOs for the v1 API.

use serde::Serialize;

use crate::intelligence::insights::{DayActivity, Insight, WeeklySummary};
use crate::intelligence::{metadata_for, Dashboard};
use crate::models::Mood;

use super::moods::MoodResponse;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DayActivityResponse {
    pub day: String,
    /// 0–100.
    pub percent: u8,
}

impl From<&DayActivity> for DayActivityResponse {
    fn from(activity: &DayActivity) -> Self {
        Self {
            day: activity.day.to_string(),
            percent: activity.percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub title: String,
    pub description: String,
    pub accent: Mood,
    pub accent_color: String,
}

impl From<&Insight> for InsightResponse {
    fn from(insight: &Insight) -> Self {
        Self {
            title: insight.title.to_string(),
            description: insight.description.to_string(),
            accent: insight.accent,
            accent_color: metadata_for(insight.accent).palette.primary.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummaryResponse {
    pub tasks_completed: u32,
    pub focus_hours: f32,
    pub wellness_breaks: u32,
    pub average_mood_score: f32,
}

impl From<&WeeklySummary> for WeeklySummaryResponse {
    fn from(summary: &WeeklySummary) -> Self {
        Self {
            tasks_completed: summary.tasks_completed,
            focus_hours: summary.focus_hours,
            wellness_breaks: summary.wellness_breaks,
            average_mood_score: summary.average_mood_score,
        }
    }
}

/// Response for `GET /sessions/{id}/insights`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Banner for the session's current mood.
    pub mood: MoodResponse,
    pub week_over_week: String,
    pub weekly_activity: Vec<DayActivityResponse>,
    pub insights: Vec<InsightResponse>,
    pub summary: WeeklySummaryResponse,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            mood: dashboard.mood.into(),
            week_over_week: dashboard.week_over_week.to_string(),
            weekly_activity: dashboard.weekly_activity.iter().map(Into::into).collect(),
            insights: dashboard.insights.iter().map(Into::into).collect(),
            summary: (&dashboard.summary).into(),
        }
    }
}
