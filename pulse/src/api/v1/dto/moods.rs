//! Mood registry and companion DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::intelligence::{CompanionCard, MoodMetadata};
use crate::models::Mood;

/// Everything the registry knows about one mood.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodResponse {
    pub key: Mood,
    pub label: String,
    pub description: String,
    pub emoji: String,
    pub primary_color: String,
    pub secondary_color: String,
    /// Palette intensity (0.0–1.0).
    pub intensity: f32,
    pub palette_description: String,
    /// Companion overlay copy.
    pub message: String,
    pub task_advice: String,
    /// Position on the energy bar (0–100).
    pub spectrum_position: u8,
}

impl From<&MoodMetadata> for MoodResponse {
    fn from(meta: &MoodMetadata) -> Self {
        Self {
            key: meta.mood,
            label: meta.label.to_string(),
            description: meta.description.to_string(),
            emoji: meta.emoji.to_string(),
            primary_color: meta.palette.primary.to_string(),
            secondary_color: meta.palette.secondary.to_string(),
            intensity: meta.palette.intensity,
            palette_description: meta.palette.description.to_string(),
            message: meta.message.to_string(),
            task_advice: meta.task_advice.to_string(),
            spectrum_position: meta.spectrum_position,
        }
    }
}

/// Request body carrying a mood key.
///
/// The key is kept as a string so an unknown value is reported through the
/// error envelope instead of a bare extractor rejection.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodRequest {
    /// One of the ten mood keys, e.g. `"focused"`.
    pub mood: String,
}

/// Companion overlay card.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionResponse {
    pub mood: Mood,
    pub emoji: String,
    pub color: String,
    pub message: String,
    pub choices: Vec<Mood>,
}

impl From<CompanionCard> for CompanionResponse {
    fn from(card: CompanionCard) -> Self {
        Self {
            mood: card.mood,
            emoji: card.emoji.to_string(),
            color: card.color.to_string(),
            message: card.message.to_string(),
            choices: card.choices.to_vec(),
        }
    }
}
