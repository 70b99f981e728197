//! Five-step onboarding wizard.
//!
//! The wizard owns a [`ProfileDraft`] that is filled in through partial
//! [`ProfilePatch`]es. `next()` only moves forward when the current step's
//! required fields are present, `back()` does nothing on the first step and
//! `finish()` hands out the committed [`UserProfile`] exactly once.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{PulseError, Result};
use crate::models::{
    CycleTracking, EmotionPalette, EmotionSwatch, Gender, HealthCondition, PersonalityType,
    ProductivityGoal, SleepSchedule, UserProfile, WorkSchedule, WorkStyle,
};

pub const MAX_PRODUCTIVITY_GOALS: usize = 3;
const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    BasicInfo,
    WorkLifestyle,
    HealthGoals,
    EmotionPalette,
    Summary,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::BasicInfo,
        OnboardingStep::WorkLifestyle,
        OnboardingStep::HealthGoals,
        OnboardingStep::EmotionPalette,
        OnboardingStep::Summary,
    ];

    /// 1-based position in the wizard.
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::BasicInfo => 1,
            OnboardingStep::WorkLifestyle => 2,
            OnboardingStep::HealthGoals => 3,
            OnboardingStep::EmotionPalette => 4,
            OnboardingStep::Summary => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::BasicInfo => "Basic Info",
            OnboardingStep::WorkLifestyle => "Work & Lifestyle",
            OnboardingStep::HealthGoals => "Health & Wellness",
            OnboardingStep::EmotionPalette => "Baseline Emotions",
            OnboardingStep::Summary => "Confirmation",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            OnboardingStep::BasicInfo => Some(OnboardingStep::WorkLifestyle),
            OnboardingStep::WorkLifestyle => Some(OnboardingStep::HealthGoals),
            OnboardingStep::HealthGoals => Some(OnboardingStep::EmotionPalette),
            OnboardingStep::EmotionPalette => Some(OnboardingStep::Summary),
            OnboardingStep::Summary => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            OnboardingStep::BasicInfo => None,
            OnboardingStep::WorkLifestyle => Some(OnboardingStep::BasicInfo),
            OnboardingStep::HealthGoals => Some(OnboardingStep::WorkLifestyle),
            OnboardingStep::EmotionPalette => Some(OnboardingStep::HealthGoals),
            OnboardingStep::Summary => Some(OnboardingStep::EmotionPalette),
        }
    }
}

/// Profile fields collected so far. Fields with a form default start filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
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
    pub cycle_tracking: CycleTracking,
    pub emotions: EmotionPalette,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            name: String::new(),
            age: None,
            gender: None,
            occupation: String::new(),
            work_schedule: Some(WorkSchedule::default()),
            sleep_schedule: SleepSchedule::default(),
            work_style: WorkStyle::default(),
            stress_level: 5,
            health_conditions: Vec::new(),
            productivity_goals: Vec::new(),
            personality_type: PersonalityType::default(),
            cycle_tracking: CycleTracking::default(),
            emotions: EmotionPalette::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwatchPatch {
    pub color: Option<String>,
    pub intensity: Option<u8>,
}

/// Partial update of a [`ProfileDraft`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub occupation: Option<String>,
    pub work_schedule: Option<WorkSchedule>,
    pub sleep_schedule: Option<SleepSchedule>,
    pub work_style: Option<WorkStyle>,
    pub stress_level: Option<u8>,
    pub health_conditions: Option<Vec<HealthCondition>>,
    pub productivity_goals: Option<Vec<ProductivityGoal>>,
    pub personality_type: Option<PersonalityType>,
    pub cycle_tracking_enabled: Option<bool>,
    pub cycle_length: Option<u8>,
    pub last_cycle_start: Option<NaiveDate>,
    pub happy: Option<SwatchPatch>,
    pub sad: Option<SwatchPatch>,
    pub angry: Option<SwatchPatch>,
}

impl ProfilePatch {
    /// Check every range constraint without touching the draft.
    pub fn validate(&self) -> Result<()> {
        if let Some(age) = self.age {
            if age == 0 || age > MAX_AGE {
                return Err(PulseError::Validation(format!(
                    "Age must be between 1 and {MAX_AGE}, got {age}"
                )));
            }
        }
        if let Some(stress) = self.stress_level {
            if !(1..=10).contains(&stress) {
                return Err(PulseError::Validation(format!(
                    "Stress level must be between 1 and 10, got {stress}"
                )));
            }
        }
        if let Some(length) = self.cycle_length {
            if !(CycleTracking::MIN_LENGTH..=CycleTracking::MAX_LENGTH).contains(&length) {
                return Err(PulseError::Validation(format!(
                    "Cycle length must be between {} and {} days, got {length}",
                    CycleTracking::MIN_LENGTH,
                    CycleTracking::MAX_LENGTH
                )));
            }
        }
        if let Some(goals) = &self.productivity_goals {
            if goals.len() > MAX_PRODUCTIVITY_GOALS {
                return Err(PulseError::Validation(format!(
                    "At most {MAX_PRODUCTIVITY_GOALS} productivity goals can be selected"
                )));
            }
        }
        for (emotion, swatch) in [("happy", &self.happy), ("sad", &self.sad), ("angry", &self.angry)]
        {
            let Some(swatch) = swatch else { continue };
            if let Some(intensity) = swatch.intensity {
                if !(1..=10).contains(&intensity) {
                    return Err(PulseError::Validation(format!(
                        "Intensity for {emotion} must be between 1 and 10, got {intensity}"
                    )));
                }
            }
            if let Some(color) = &swatch.color {
                if !is_hex_color(color) {
                    return Err(PulseError::Validation(format!(
                        "Color for {emotion} must look like #RRGGBB, got {color}"
                    )));
                }
            }
        }
        Ok(())
    }

    fn apply_to(self, draft: &mut ProfileDraft) {
        if let Some(nickname) = self.nickname {
            draft.nickname = nickname;
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(age) = self.age {
            draft.age = Some(age);
        }
        if let Some(gender) = self.gender {
            draft.gender = Some(gender);
        }
        if let Some(occupation) = self.occupation {
            draft.occupation = occupation;
        }
        if let Some(schedule) = self.work_schedule {
            draft.work_schedule = Some(schedule);
        }
        if let Some(schedule) = self.sleep_schedule {
            draft.sleep_schedule = schedule;
        }
        if let Some(style) = self.work_style {
            draft.work_style = style;
        }
        if let Some(stress) = self.stress_level {
            draft.stress_level = stress;
        }
        if let Some(conditions) = self.health_conditions {
            draft.health_conditions = dedup(conditions);
        }
        if let Some(goals) = self.productivity_goals {
            draft.productivity_goals = dedup(goals);
        }
        if let Some(personality) = self.personality_type {
            draft.personality_type = personality;
        }
        if let Some(enabled) = self.cycle_tracking_enabled {
            draft.cycle_tracking.enabled = enabled;
        }
        if let Some(length) = self.cycle_length {
            draft.cycle_tracking.cycle_length = length;
        }
        if let Some(start) = self.last_cycle_start {
            draft.cycle_tracking.last_start = Some(start);
        }
        apply_swatch(&mut draft.emotions.happy, self.happy);
        apply_swatch(&mut draft.emotions.sad, self.sad);
        apply_swatch(&mut draft.emotions.angry, self.angry);
    }
}

fn apply_swatch(swatch: &mut EmotionSwatch, patch: Option<SwatchPatch>) {
    let Some(patch) = patch else { return };
    if let Some(color) = patch.color {
        swatch.color = color.to_uppercase();
    }
    if let Some(intensity) = patch.intensity {
        swatch.intensity = intensity;
    }
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Outcome of a `next()` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(OnboardingStep),
    /// The current step is incomplete, or there is no further step.
    Stayed(OnboardingStep),
}

impl Advance {
    pub fn step(&self) -> OnboardingStep {
        match self {
            Advance::Moved(step) | Advance::Stayed(step) => *step,
        }
    }

    pub fn moved(&self) -> bool {
        matches!(self, Advance::Moved(_))
    }
}

#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    draft: ProfileDraft,
    completed: bool,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::BasicInfo,
            draft: ProfileDraft::default(),
            completed: false,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn can_go_back(&self) -> bool {
        !self.completed && self.step.prev().is_some()
    }

    pub fn cycle_tracking_visible(&self) -> bool {
        self.draft.gender == Some(Gender::Female)
    }

    pub fn step_is_valid(&self) -> bool {
        Self::validates(self.step, &self.draft)
    }

    fn validates(step: OnboardingStep, draft: &ProfileDraft) -> bool {
        match step {
            OnboardingStep::BasicInfo => {
                !draft.name.trim().is_empty() && draft.age.is_some() && draft.gender.is_some()
            }
            OnboardingStep::WorkLifestyle => {
                !draft.occupation.trim().is_empty() && draft.work_schedule.is_some()
            }
            OnboardingStep::HealthGoals
            | OnboardingStep::EmotionPalette
            | OnboardingStep::Summary => true,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.completed {
            return Err(PulseError::InvalidTransition(
                "Onboarding is already complete".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply a partial update. A rejected patch leaves the draft unchanged.
    pub fn apply(&mut self, patch: ProfilePatch) -> Result<()> {
        self.ensure_open()?;
        patch.validate()?;
        patch.apply_to(&mut self.draft);
        Ok(())
    }

    pub fn next(&mut self) -> Result<Advance> {
        self.ensure_open()?;
        if !self.step_is_valid() {
            tracing::debug!(step = ?self.step, "Onboarding step incomplete, staying");
            return Ok(Advance::Stayed(self.step));
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                Ok(Advance::Moved(step))
            }
            None => Ok(Advance::Stayed(self.step)),
        }
    }

    /// Step back. A no-op on the first step.
    pub fn back(&mut self) -> Result<OnboardingStep> {
        self.ensure_open()?;
        if let Some(step) = self.step.prev() {
            self.step = step;
        }
        Ok(self.step)
    }

    /// Commit the draft. Only legal on the summary step, and only once.
    pub fn finish(&mut self) -> Result<UserProfile> {
        self.ensure_open()?;
        if self.step != OnboardingStep::Summary {
            return Err(PulseError::InvalidTransition(format!(
                "Onboarding can only be finished from the summary step, currently on step {}",
                self.step.number()
            )));
        }

        let profile = self.build_profile()?;
        self.completed = true;
        tracing::info!(name = %profile.name, "Onboarding complete");
        Ok(profile)
    }

    fn build_profile(&self) -> Result<UserProfile> {
        let draft = &self.draft;
        if let Some(step) = OnboardingStep::ALL
            .into_iter()
            .find(|step| !Self::validates(*step, draft))
        {
            return Err(PulseError::Validation(format!(
                "Step {} is incomplete",
                step.number()
            )));
        }

        let (Some(age), Some(gender), Some(work_schedule)) =
            (draft.age, draft.gender, draft.work_schedule)
        else {
            return Err(PulseError::Validation(
                "Profile is missing required fields".to_string(),
            ));
        };

        let nickname = draft.nickname.trim();
        Ok(UserProfile {
            nickname: (!nickname.is_empty()).then(|| nickname.to_string()),
            name: draft.name.trim().to_string(),
            age,
            gender,
            occupation: draft.occupation.trim().to_string(),
            work_schedule,
            sleep_schedule: draft.sleep_schedule,
            work_style: draft.work_style,
            stress_level: draft.stress_level,
            health_conditions: draft.health_conditions.clone(),
            productivity_goals: draft.productivity_goals.clone(),
            personality_type: draft.personality_type,
            cycle_tracking: (gender == Gender::Female).then(|| draft.cycle_tracking.clone()),
            emotions: draft.emotions.clone(),
        })
    }
}
