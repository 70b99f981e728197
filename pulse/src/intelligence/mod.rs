pub mod companion;
pub mod insights;
pub mod recommend;
pub mod registry;
pub mod suggestions;

pub use companion::{companion_card, CompanionCard};
pub use insights::{dashboard, Dashboard};
pub use recommend::{recommend, scorer_for};
pub use registry::{metadata_for, metadata_for_key, MoodMetadata};
pub use suggestions::{productivity_tips, tasks_for_mood, TaskTemplate, WELLNESS_NUDGES};
