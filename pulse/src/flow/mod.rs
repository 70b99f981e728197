pub mod navigation;
pub mod onboarding;

pub use navigation::{MoodCell, MoodWatch, Navigator, View};
pub use onboarding::{
    Advance, OnboardingStep, OnboardingWizard, ProfileDraft, ProfilePatch, SwatchPatch,
};
