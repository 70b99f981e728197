//! Onboarding wizard and profile DTOs for the v1 API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flow::{OnboardingStep, OnboardingWizard, ProfileDraft, ProfilePatch, SwatchPatch};
use crate::models::{
    CycleTracking, EmotionPalette, EmotionSwatch, Gender, HealthCondition, PersonalityType,
    ProductivityGoal, SleepSchedule, UserProfile, WorkSchedule, WorkStyle,
};

/// Request body for `PATCH /sessions/{id}/onboarding`. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOnboardingRequest {
    pub nickname: Option<String>,
    pub name: Option<String>,
    /// 1–120.
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub occupation: Option<String>,
    pub work_schedule: Option<WorkSchedule>,
    pub sleep_schedule: Option<SleepSchedule>,
    pub work_style: Option<WorkStyle>,
    /// 1–10.
    pub stress_level: Option<u8>,
    pub health_conditions: Option<Vec<HealthCondition>>,
    /// At most three.
    pub productivity_goals: Option<Vec<ProductivityGoal>>,
    pub personality_type: Option<PersonalityType>,
    pub cycle_tracking_enabled: Option<bool>,
    /// 21–35 days.
    pub cycle_length: Option<u8>,
    #[schema(value_type = Option<String>, format = Date)]
    pub last_cycle_start: Option<NaiveDate>,
    pub happy: Option<SwatchUpdate>,
    pub sad: Option<SwatchUpdate>,
    pub angry: Option<SwatchUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct SwatchUpdate {
    /// `#RRGGBB`.
    pub color: Option<String>,
    /// 1–10.
    pub intensity: Option<u8>,
}

impl From<SwatchUpdate> for SwatchPatch {
    fn from(update: SwatchUpdate) -> Self {
        Self {
            color: update.color,
            intensity: update.intensity,
        }
    }
}

impl From<UpdateOnboardingRequest> for ProfilePatch {
    fn from(req: UpdateOnboardingRequest) -> Self {
        Self {
            nickname: req.nickname,
            name: req.name,
            age: req.age,
            gender: req.gender,
            occupation: req.occupation,
            work_schedule: req.work_schedule,
            sleep_schedule: req.sleep_schedule,
            work_style: req.work_style,
            stress_level: req.stress_level,
            health_conditions: req.health_conditions,
            productivity_goals: req.productivity_goals,
            personality_type: req.personality_type,
            cycle_tracking_enabled: req.cycle_tracking_enabled,
            cycle_length: req.cycle_length,
            last_cycle_start: req.last_cycle_start,
            happy: req.happy.map(Into::into),
            sad: req.sad.map(Into::into),
            angry: req.angry.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SwatchResponse {
    pub color: String,
    pub intensity: u8,
}

impl From<&EmotionSwatch> for SwatchResponse {
    fn from(swatch: &EmotionSwatch) -> Self {
        Self {
            color: swatch.color.clone(),
            intensity: swatch.intensity,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PaletteResponse {
    pub happy: SwatchResponse,
    pub sad: SwatchResponse,
    pub angry: SwatchResponse,
}

impl From<&EmotionPalette> for PaletteResponse {
    fn from(palette: &EmotionPalette) -> Self {
        Self {
            happy: (&palette.happy).into(),
            sad: (&palette.sad).into(),
            angry: (&palette.angry).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CycleTrackingResponse {
    pub enabled: bool,
    pub cycle_length: u8,
    #[schema(value_type = Option<String>, format = Date)]
    pub last_start: Option<NaiveDate>,
}

impl From<&CycleTracking> for CycleTrackingResponse {
    fn from(cycle: &CycleTracking) -> Self {
        Self {
            enabled: cycle.enabled,
            cycle_length: cycle.cycle_length,
            last_start: cycle.last_start,
        }
    }
}

/// Draft profile as collected so far.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub nickname: String,
    pub name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub occupation: String,
    pub work_schedule: Option<WorkSchedule>,
    pub sleep_schedule: SleepSchedule,
    pub work_style: WorkStyle,
    pub stress_level: u8,
    pub health_conditions: Vec<HealthCondition>,
    pub productivity_goals: Vec<ProductivityGoal>,
    pub personality_type: PersonalityType,
    /// Only present while the cycle-tracking fields are visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_tracking: Option<CycleTrackingResponse>,
    pub emotions: PaletteResponse,
}

impl DraftResponse {
    fn new(draft: &ProfileDraft, cycle_visible: bool) -> Self {
        Self {
            nickname: draft.nickname.clone(),
            name: draft.name.clone(),
            age: draft.age,
            gender: draft.gender,
            occupation: draft.occupation.clone(),
            work_schedule: draft.work_schedule,
            sleep_schedule: draft.sleep_schedule,
            work_style: draft.work_style,
            stress_level: draft.stress_level,
            health_conditions: draft.health_conditions.clone(),
            productivity_goals: draft.productivity_goals.clone(),
            personality_type: draft.personality_type,
            cycle_tracking: cycle_visible.then(|| (&draft.cycle_tracking).into()),
            emotions: (&draft.emotions).into(),
        }
    }
}

/// Wizard state.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub step: OnboardingStep,
    /// 1-based.
    pub step_number: u8,
    pub step_title: String,
    pub total_steps: u8,
    /// Whether `next` would advance right now.
    pub step_valid: bool,
    pub can_go_back: bool,
    pub cycle_tracking_visible: bool,
    pub completed: bool,
    /// Set on `next`: whether the step actually changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved: Option<bool>,
    pub draft: DraftResponse,
}

impl From<&OnboardingWizard> for OnboardingResponse {
    fn from(wizard: &OnboardingWizard) -> Self {
        let step = wizard.step();
        Self {
            step,
            step_number: step.number(),
            step_title: step.title().to_string(),
            total_steps: OnboardingStep::ALL.len() as u8,
            step_valid: wizard.step_is_valid(),
            can_go_back: wizard.can_go_back(),
            cycle_tracking_visible: wizard.cycle_tracking_visible(),
            completed: wizard.is_completed(),
            moved: None,
            draft: DraftResponse::new(wizard.draft(), wizard.cycle_tracking_visible()),
        }
    }
}

/// Committed profile.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Nickname when set, otherwise the name.
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub occupation: String,
    pub work_schedule: WorkSchedule,
    pub sleep_schedule: SleepSchedule,
    pub work_style: WorkStyle,
    pub stress_level: u8,
    pub health_conditions: Vec<HealthCondition>,
    pub productivity_goals: Vec<ProductivityGoal>,
    pub personality_type: PersonalityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_tracking: Option<CycleTrackingResponse>,
    pub emotions: PaletteResponse,
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            display_name: profile.display_name().to_string(),
            nickname: profile.nickname.clone(),
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender,
            occupation: profile.occupation.clone(),
            work_schedule: profile.work_schedule,
            sleep_schedule: profile.sleep_schedule,
            work_style: profile.work_style,
            stress_level: profile.stress_level,
            health_conditions: profile.health_conditions.clone(),
            productivity_goals: profile.productivity_goals.clone(),
            personality_type: profile.personality_type,
            cycle_tracking: profile.cycle_tracking.as_ref().map(Into::into),
            emotions: (&profile.emotions).into(),
        }
    }
}
