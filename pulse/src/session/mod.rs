//! Per-client sessions.
//!
//! A [`Session`] bundles the navigator, onboarding wizard, task list, mood
//! capture state and daily plan of one client. Sessions live only in memory
//! inside a [`SessionStore`]; [`SessionReaper`] ends the idle ones.

mod reaper;
mod state;
mod store;

pub use reaper::SessionReaper;
pub use state::{DailyPlan, MoodCapture, Session};
pub use store::{analyze_mood, refresh_plan, SessionHandle, SessionStore};
