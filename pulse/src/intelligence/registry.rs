//! Static presentation table for every [`Mood`].
//!
//! This is the only place mood colors, emojis and companion copy are written
//! down. Every lookup is total: [`metadata_for`] matches exhaustively over the
//! closed mood set, and [`metadata_for_key`] routes anything it cannot parse to
//! the neutral entry.

use crate::models::{EmotionResult, Mood};

/// Color used when there is nothing to draw a spectrum from.
pub const EMPTY_SPECTRUM_COLOR: &str = "#A9A9A9";

const SPECTRUM_LIMIT: usize = 5;

/// Color-palette half of a mood's metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    /// 0.0 to 1.0.
    pub intensity: f32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodMetadata {
    pub mood: Mood,
    pub label: &'static str,
    pub description: &'static str,
    pub palette: Palette,
    pub emoji: &'static str,
    /// Companion overlay copy.
    pub message: &'static str,
    /// Hint shown next to a user task while in this mood.
    pub task_advice: &'static str,
    /// Position on the low-to-high energy bar, 0 to 100.
    pub spectrum_position: u8,
}

static HAPPY: MoodMetadata = MoodMetadata {
    mood: Mood::Happy,
    label: "Happy",
    description: "Feeling great!",
    palette: Palette {
        primary: "#FFD700",
        secondary: "#FFA500",
        intensity: 0.8,
        description: "Warm, bright, uplifting",
    },
    emoji: "😊",
    message: "You're radiating positivity today! Perfect time for collaborative tasks.",
    task_advice: "Great time for collaborative tasks! Your positive energy will boost team morale.",
    spectrum_position: 85,
};

static CALM: MoodMetadata = MoodMetadata {
    mood: Mood::Calm,
    label: "Calm",
    description: "Peaceful & serene",
    palette: Palette {
        primary: "#87CEEB",
        secondary: "#B0E0E6",
        intensity: 0.6,
        description: "Peaceful, serene, soothing",
    },
    emoji: "😌",
    message: "Your peaceful energy is perfect for focused, mindful work.",
    task_advice: "Excellent for detailed work that requires patience and precision.",
    spectrum_position: 35,
};

static FOCUSED: MoodMetadata = MoodMetadata {
    mood: Mood::Focused,
    label: "Focused",
    description: "Ready to concentrate",
    palette: Palette {
        primary: "#9370DB",
        secondary: "#8A2BE2",
        intensity: 0.7,
        description: "Deep, concentrated, clear",
    },
    emoji: "🎯",
    message: "Your concentration is sharp! Great time for deep work.",
    task_advice: "Ideal for deep work and complex problem-solving. Minimize distractions.",
    spectrum_position: 45,
};

static ENERGETIC: MoodMetadata = MoodMetadata {
    mood: Mood::Energetic,
    label: "Energetic",
    description: "Full of energy!",
    palette: Palette {
        primary: "#FF6347",
        secondary: "#FF4500",
        intensity: 0.9,
        description: "Vibrant, dynamic, stimulating",
    },
    emoji: "⚡",
    message: "Channel that amazing energy into your biggest challenges!",
    task_advice: "Perfect for tackling challenging or physical tasks. Channel that energy!",
    spectrum_position: 65,
};

static STRESSED: MoodMetadata = MoodMetadata {
    mood: Mood::Stressed,
    label: "Stressed",
    description: "Feeling overwhelmed",
    palette: Palette {
        primary: "#DC143C",
        secondary: "#B22222",
        intensity: 0.8,
        description: "Intense, urgent, overwhelming",
    },
    emoji: "😰",
    message: "Let's break things down into smaller, manageable steps.",
    task_advice: "Break this into smaller chunks. Consider doing it when you feel calmer.",
    spectrum_position: 5,
};

static TIRED: MoodMetadata = MoodMetadata {
    mood: Mood::Tired,
    label: "Tired",
    description: "Need some rest",
    palette: Palette {
        primary: "#708090",
        secondary: "#696969",
        intensity: 0.4,
        description: "Muted, low-energy, subdued",
    },
    emoji: "😴",
    message: "Easy tasks first - be gentle with yourself today.",
    task_advice: "Save for when you're more energized, or break into very small steps.",
    spectrum_position: 15,
};

static CREATIVE: MoodMetadata = MoodMetadata {
    mood: Mood::Creative,
    label: "Creative",
    description: "Feeling artistic!",
    palette: Palette {
        primary: "#DA70D6",
        secondary: "#FF69B4",
        intensity: 0.8,
        description: "Imaginative, expressive, flowing",
    },
    emoji: "🎨",
    message: "Your creative mind is active! Time to innovate and explore.",
    task_advice: "Add a creative twist to this task! Think outside the box.",
    spectrum_position: 55,
};

static NEUTRAL: MoodMetadata = MoodMetadata {
    mood: Mood::Neutral,
    label: "Neutral",
    description: "Just okay",
    palette: Palette {
        primary: "#A9A9A9",
        secondary: "#808080",
        intensity: 0.5,
        description: "Balanced, steady, centered",
    },
    emoji: "😐",
    message: "A steady day ahead. Let's build consistent progress.",
    task_advice: "A steady approach works best. Focus on consistent progress.",
    spectrum_position: 25,
};

static MOTIVATED: MoodMetadata = MoodMetadata {
    mood: Mood::Motivated,
    label: "Motivated",
    description: "Ready to achieve!",
    palette: Palette {
        primary: "#32CD32",
        secondary: "#228B22",
        intensity: 0.9,
        description: "Driven, ambitious, determined",
    },
    emoji: "🚀",
    message: "Your drive is inspiring! Perfect time to tackle ambitious goals.",
    task_advice: "Strike while the iron is hot! Your drive will carry you through.",
    spectrum_position: 75,
};

static SAD: MoodMetadata = MoodMetadata {
    mood: Mood::Sad,
    label: "Sad",
    description: "Feeling down",
    palette: Palette {
        primary: "#4169E1",
        secondary: "#1E90FF",
        intensity: 0.6,
        description: "Melancholic, introspective, deep",
    },
    emoji: "😢",
    message: "Be gentle with yourself today. Small, kind steps count.",
    task_advice: "Be gentle with yourself. Consider postponing or asking for support.",
    spectrum_position: 10,
};

pub fn metadata_for(mood: Mood) -> &'static MoodMetadata {
    match mood {
        Mood::Happy => &HAPPY,
        Mood::Calm => &CALM,
        Mood::Focused => &FOCUSED,
        Mood::Energetic => &ENERGETIC,
        Mood::Stressed => &STRESSED,
        Mood::Tired => &TIRED,
        Mood::Creative => &CREATIVE,
        Mood::Neutral => &NEUTRAL,
        Mood::Motivated => &MOTIVATED,
        Mood::Sad => &SAD,
    }
}

/// Lookup for keys that have not been parsed yet. Unknown keys get the
/// neutral entry.
pub fn metadata_for_key(key: &str) -> &'static MoodMetadata {
    metadata_for(Mood::from_key(key))
}

pub fn message_for(mood: Mood) -> &'static str {
    metadata_for(mood).message
}

pub fn emoji_for(mood: Mood) -> &'static str {
    metadata_for(mood).emoji
}

pub fn color_for(mood: Mood) -> &'static str {
    metadata_for(mood).palette.primary
}

pub fn spectrum_position_for(mood: Mood) -> u8 {
    metadata_for(mood).spectrum_position
}

pub fn task_advice_for(mood: Mood) -> &'static str {
    metadata_for(mood).task_advice
}

pub fn palette_for(mood: Mood) -> Palette {
    metadata_for(mood).palette
}

/// Primary colors of the five most confident results, most confident first.
pub fn color_spectrum(results: &[EmotionResult]) -> Vec<&'static str> {
    if results.is_empty() {
        return vec![EMPTY_SPECTRUM_COLOR];
    }

    let mut ranked: Vec<&EmotionResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    ranked
        .into_iter()
        .take(SPECTRUM_LIMIT)
        .map(|r| color_for(r.emotion))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn result(emotion: Mood, confidence: f32) -> EmotionResult {
        EmotionResult::new(emotion, confidence, String::new(), 0.5)
    }

    #[test]
    fn every_mood_has_its_own_entry() {
        for mood in Mood::ALL {
            assert_eq!(metadata_for(mood).mood, mood);
        }
    }

    #[test]
    fn unknown_key_gets_neutral_entry() {
        assert_eq!(metadata_for_key("grumpy"), metadata_for(Mood::Neutral));
        assert_eq!(metadata_for_key(""), metadata_for(Mood::Neutral));
        assert_eq!(metadata_for_key("SAD"), metadata_for(Mood::Sad));
    }

    #[test]
    fn primary_colors_are_distinct() {
        let colors: HashSet<_> = Mood::ALL.iter().map(|m| color_for(*m)).collect();
        assert_eq!(colors.len(), Mood::ALL.len());
    }

    #[test]
    fn spectrum_positions_stay_in_range() {
        for mood in Mood::ALL {
            assert!(spectrum_position_for(mood) <= 100);
        }
        assert_eq!(spectrum_position_for(Mood::Happy), 85);
        assert_eq!(spectrum_position_for(Mood::Stressed), 5);
    }

    #[test]
    fn projections_read_the_same_row() {
        assert_eq!(color_for(Mood::Happy), "#FFD700");
        assert_eq!(emoji_for(Mood::Focused), "🎯");
        assert!(message_for(Mood::Stressed).contains("smaller"));
        assert_eq!(palette_for(Mood::Tired).intensity, 0.4);
    }

    #[test]
    fn empty_spectrum_is_gray() {
        assert_eq!(color_spectrum(&[]), vec!["#A9A9A9"]);
    }

    #[test]
    fn spectrum_keeps_top_five_by_confidence() {
        let results = vec![
            result(Mood::Tired, 0.1),
            result(Mood::Happy, 0.9),
            result(Mood::Calm, 0.5),
            result(Mood::Sad, 0.7),
            result(Mood::Focused, 0.3),
            result(Mood::Stressed, 0.2),
        ];
        let spectrum = color_spectrum(&results);
        assert_eq!(
            spectrum,
            vec!["#FFD700", "#4169E1", "#87CEEB", "#9370DB", "#DC143C"]
        );
    }
}
