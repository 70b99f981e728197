use serde::{Deserialize, Serialize};

use super::Mood;

/// Outcome of classifying one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: Mood,
    /// 0.0 to 1.0. A fallback result always carries 0.0.
    pub confidence: f32,
    pub color: String,
    /// 0.0 to 1.0, taken from the mood palette.
    pub intensity: f32,
    /// Set only on the substitute handed out when classification failed.
    #[serde(default)]
    fallback: bool,
}

impl EmotionResult {
    pub const FALLBACK_COLOR: &'static str = "#FFD700";
    pub const FALLBACK_INTENSITY: f32 = 0.8;

    /// A result produced by a classifier.
    pub fn new(emotion: Mood, confidence: f32, color: impl Into<String>, intensity: f32) -> Self {
        Self {
            emotion,
            confidence,
            color: color.into(),
            intensity,
            fallback: false,
        }
    }

    /// Result handed out whenever classification fails.
    pub fn fallback() -> Self {
        Self {
            fallback: true,
            ..Self::new(
                Mood::Happy,
                0.0,
                Self::FALLBACK_COLOR,
                Self::FALLBACK_INTENSITY,
            )
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_gold_happy() {
        let result = EmotionResult::fallback();
        assert_eq!(result.emotion, Mood::Happy);
        assert_eq!(result.color, "#FFD700");
        assert_eq!(result.confidence, 0.0);
        assert!(result.is_fallback());
    }

    #[test]
    fn classified_happy_with_zero_confidence_is_not_a_fallback() {
        let result = EmotionResult::new(Mood::Happy, 0.0, "#FFD700", 0.8);
        assert!(!result.is_fallback());
        assert_ne!(result, EmotionResult::fallback());
    }
}
