//! Session, navigation and mood-capture DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flow::{OnboardingStep, View};
use crate::models::{EmotionResult, Mood};
use crate::session::{MoodCapture, Session};

/// Snapshot of a session's state machines.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[schema(value_type = String)]
    pub id: Uuid,
    pub view: View,
    /// The session's current mood.
    pub mood: Mood,
    pub started: bool,
    pub onboarded: bool,
    /// Whether the bottom navigation bar is shown.
    pub navigation_visible: bool,
    pub onboarding_step: OnboardingStep,
    pub capture: CaptureResponse,
    pub task_count: usize,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub last_active: DateTime<Utc>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        let nav = session.navigator();
        Self {
            id: session.id,
            view: nav.view(),
            mood: nav.mood(),
            started: nav.is_started(),
            onboarded: nav.is_onboarded(),
            navigation_visible: nav.navigation_visible(),
            onboarding_step: session.onboarding().step(),
            capture: CaptureResponse::from(session.capture()),
            task_count: session.tasks().len(),
            created_at: session.created_at,
            last_active: session.last_active(),
        }
    }
}

/// Response for `DELETE /sessions/{id}`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedResponse {
    #[schema(value_type = String)]
    pub id: Uuid,
    /// Tasks dropped with the session.
    pub discarded_tasks: usize,
}

/// Mood-capture screen state.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaptureResponse {
    /// Picked on the grid but not yet confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected: Option<EmotionResponse>,
    /// An image is being analyzed.
    pub pending: bool,
}

impl From<&MoodCapture> for CaptureResponse {
    fn from(capture: &MoodCapture) -> Self {
        Self {
            selected: capture.selected,
            detected: capture.detected.clone().map(Into::into),
            pending: capture.pending,
        }
    }
}

/// Classifier output.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmotionResponse {
    pub emotion: Mood,
    /// 0.0–1.0.
    pub confidence: f32,
    pub color: String,
    /// 0.0–1.0.
    pub intensity: f32,
    /// True when analysis failed and the default result was substituted.
    pub is_fallback: bool,
}

impl From<EmotionResult> for EmotionResponse {
    fn from(result: EmotionResult) -> Self {
        Self {
            is_fallback: result.is_fallback(),
            emotion: result.emotion,
            confidence: result.confidence,
            color: result.color,
            intensity: result.intensity,
        }
    }
}

/// Response for `POST /sessions/{id}/mood/analyze`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub result: EmotionResponse,
    /// Productivity tips for the detected mood and intensity.
    pub tips: Vec<String>,
}

/// Request body for `POST /sessions/{id}/navigate`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigateRequest {
    pub view: View,
}

/// Current view and mood after a transition.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub view: View,
    pub mood: Mood,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_snapshot() {
        let session = Session::new(Uuid::new_v4());
        let resp = SessionResponse::from(&session);
        assert_eq!(resp.view, View::Splash);
        assert_eq!(resp.mood, Mood::Neutral);
        assert!(!resp.navigation_visible);

        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["view"], "splash");
        assert_eq!(json["onboardingStep"], "basic-info");
        assert!(json["capture"].get("detected").is_none());
    }

    #[test]
    fn navigate_request_parses_kebab_case_view() {
        let req: NavigateRequest =
            serde_json::from_str(r#"{"view": "mood-capture"}"#).expect("deserialize");
        assert_eq!(req.view, View::MoodCapture);
        assert!(serde_json::from_str::<NavigateRequest>(r#"{"view": "settings"}"#).is_err());
    }

    #[test]
    fn fallback_is_flagged() {
        let resp = EmotionResponse::from(EmotionResult::fallback());
        assert!(resp.is_fallback);
        assert_eq!(resp.emotion, Mood::Happy);
    }
}
