use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
pub enum WorkSchedule {
    #[default]
    #[serde(rename = "9-5")]
    NineToFive,
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "night-shift")]
    NightShift,
    #[serde(rename = "rotating")]
    Rotating,
    #[serde(rename = "freelance")]
    Freelance,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
pub enum SleepSchedule {
    #[serde(rename = "10pm-6am")]
    TenToSix,
    #[default]
    #[serde(rename = "11pm-7am")]
    ElevenToSeven,
    #[serde(rename = "12am-8am")]
    MidnightToEight,
    #[serde(rename = "1am-9am")]
    OneToNine,
    #[serde(rename = "irregular")]
    Irregular,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    #[default]
    Focused,
    Collaborative,
    Mixed,
    Multitasking,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityType {
    Introvert,
    Extrovert,
    #[default]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HealthCondition {
    Anxiety,
    Depression,
    Adhd,
    Insomnia,
    ChronicFatigue,
    Migraines,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProductivityGoal {
    WorkLifeBalance,
    ReduceProcrastination,
    ImproveFocus,
    ManageStress,
    ConsistentHabits,
    IncreaseEnergy,
    TimeManagement,
}

impl ProductivityGoal {
    pub fn label(&self) -> &'static str {
        match self {
            ProductivityGoal::WorkLifeBalance => "Better work-life balance",
            ProductivityGoal::ReduceProcrastination => "Reduce procrastination",
            ProductivityGoal::ImproveFocus => "Improve focus and concentration",
            ProductivityGoal::ManageStress => "Manage stress and anxiety",
            ProductivityGoal::ConsistentHabits => "Build consistent habits",
            ProductivityGoal::IncreaseEnergy => "Increase energy levels",
            ProductivityGoal::TimeManagement => "Better time management",
        }
    }
}

/// Cycle-tracking settings, only kept for profiles with `Gender::Female`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleTracking {
    pub enabled: bool,
    pub cycle_length: u8,
    pub last_start: Option<NaiveDate>,
}

impl CycleTracking {
    pub const MIN_LENGTH: u8 = 21;
    pub const MAX_LENGTH: u8 = 35;
}

impl Default for CycleTracking {
    fn default() -> Self {
        Self {
            enabled: false,
            cycle_length: 28,
            last_start: None,
        }
    }
}

/// A user-chosen color and intensity (1-10) for one emotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionSwatch {
    pub color: String,
    pub intensity: u8,
}

impl EmotionSwatch {
    fn new(color: &str, intensity: u8) -> Self {
        Self {
            color: color.to_string(),
            intensity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionPalette {
    pub happy: EmotionSwatch,
    pub sad: EmotionSwatch,
    pub angry: EmotionSwatch,
}

impl Default for EmotionPalette {
    fn default() -> Self {
        Self {
            happy: EmotionSwatch::new("#FFD700", 7),
            sad: EmotionSwatch::new("#4169E1", 5),
            angry: EmotionSwatch::new("#DC143C", 6),
        }
    }
}

/// The committed result of onboarding. Immutable once handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
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
    pub cycle_tracking: Option<CycleTracking>,
    pub emotions: EmotionPalette,
}

impl UserProfile {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }
}
