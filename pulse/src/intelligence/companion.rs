//! Companion overlay card.

use crate::models::Mood;

use super::registry::metadata_for;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanionCard {
    pub mood: Mood,
    pub emoji: &'static str,
    pub color: &'static str,
    pub message: &'static str,
    /// Every mood the overlay can switch to, in display order.
    pub choices: [Mood; 10],
}

pub fn companion_card(mood: Mood) -> CompanionCard {
    let meta = metadata_for(mood);
    CompanionCard {
        mood,
        emoji: meta.emoji,
        color: meta.palette.primary,
        message: meta.message,
        choices: Mood::ALL,
    }
}
