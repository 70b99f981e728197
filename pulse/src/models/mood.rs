use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PulseError;

/// The closed set of moods the app understands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Focused,
    Energetic,
    Stressed,
    Tired,
    Creative,
    #[default]
    Neutral,
    Motivated,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Focused,
        Mood::Energetic,
        Mood::Stressed,
        Mood::Tired,
        Mood::Creative,
        Mood::Neutral,
        Mood::Motivated,
        Mood::Sad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Focused => "focused",
            Mood::Energetic => "energetic",
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Creative => "creative",
            Mood::Neutral => "neutral",
            Mood::Motivated => "motivated",
            Mood::Sad => "sad",
        }
    }

    /// Lenient parse for keys coming from outside the crate.
    ///
    /// Anything outside the closed set resolves to [`Mood::Neutral`].
    pub fn from_key(key: &str) -> Mood {
        key.parse().unwrap_or_else(|_| {
            tracing::debug!(key, "Unknown mood key, using neutral");
            Mood::Neutral
        })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or_else(|| PulseError::Validation(format!("Unknown mood: {s}")))
    }
}
