use crate::models::Mood;

/// Labels the mock backend draws from.
pub const MOCK_LABELS: [&str; 5] = ["happiness", "calm", "focus", "energy", "stress"];

/// Translate an external classifier label into a [`Mood`].
///
/// Matching ignores case and surrounding whitespace. Labels outside the
/// table become [`Mood::Neutral`].
pub fn translate_label(label: &str) -> Mood {
    match label.trim().to_lowercase().as_str() {
        "happiness" | "joy" => Mood::Happy,
        "excitement" | "energy" => Mood::Energetic,
        "calm" | "peace" => Mood::Calm,
        "focus" | "concentration" => Mood::Focused,
        "stress" | "anxiety" => Mood::Stressed,
        "fatigue" | "exhaustion" => Mood::Tired,
        "creativity" | "inspiration" => Mood::Creative,
        "neutral" => Mood::Neutral,
        "motivation" | "drive" => Mood::Motivated,
        "sadness" | "melancholy" => Mood::Sad,
        other => {
            tracing::debug!(label = other, "Unmapped classifier label, using neutral");
            Mood::Neutral
        }
    }
}
