//! Top-level view state machine and the shared current-mood cell.
//!
//! ```text
//! Splash --get_started--> Onboarding --complete_onboarding--> MoodCapture
//! MoodCapture --confirm_mood--> Tasks
//! MoodCapture <--navigate--> Tasks <--navigate--> Insights   (once onboarded)
//! ```
//!
//! The current mood lives in a single [`MoodCell`]. Every consumer reads it
//! through a [`MoodWatch`]; writes go through [`Navigator::confirm_mood`] or
//! the companion side channel [`Navigator::update_mood`].

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::{PulseError, Result};
use crate::models::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Splash,
    Onboarding,
    MoodCapture,
    Tasks,
    Insights,
}

impl View {
    /// Views reachable from the bottom navigation bar.
    pub fn is_lateral(&self) -> bool {
        matches!(self, View::MoodCapture | View::Tasks | View::Insights)
    }
}

/// Owner of the current mood. There is exactly one per session.
#[derive(Debug)]
pub struct MoodCell {
    tx: watch::Sender<Mood>,
}

impl MoodCell {
    pub fn new(initial: Mood) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> Mood {
        *self.tx.borrow()
    }

    fn set(&self, mood: Mood) -> Mood {
        self.tx.send_replace(mood)
    }

    pub fn subscribe(&self) -> MoodWatch {
        MoodWatch {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for MoodCell {
    fn default() -> Self {
        Self::new(Mood::default())
    }
}

/// Read handle on a [`MoodCell`].
#[derive(Debug, Clone)]
pub struct MoodWatch {
    rx: watch::Receiver<Mood>,
}

impl MoodWatch {
    pub fn current(&self) -> Mood {
        *self.rx.borrow()
    }

    /// Wait for the next write and return the new mood.
    pub async fn changed(&mut self) -> Result<Mood> {
        self.rx
            .changed()
            .await
            .map_err(|_| PulseError::Internal("Mood cell dropped".to_string()))?;
        Ok(*self.rx.borrow_and_update())
    }
}

#[derive(Debug)]
pub struct Navigator {
    view: View,
    started: bool,
    onboarded: bool,
    mood: MoodCell,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            view: View::Splash,
            started: false,
            onboarded: false,
            mood: MoodCell::default(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mood(&self) -> Mood {
        self.mood.get()
    }

    pub fn watch_mood(&self) -> MoodWatch {
        self.mood.subscribe()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_onboarded(&self) -> bool {
        self.onboarded
    }

    pub fn navigation_visible(&self) -> bool {
        self.started && self.onboarded
    }

    fn reject(&self, action: &str) -> PulseError {
        PulseError::InvalidTransition(format!("Cannot {action} from {:?}", self.view))
    }

    /// Splash -> Onboarding.
    pub fn get_started(&mut self) -> Result<View> {
        if self.view != View::Splash {
            return Err(self.reject("get started"));
        }
        self.started = true;
        self.view = View::Onboarding;
        Ok(self.view)
    }

    /// Onboarding -> MoodCapture, once the wizard has committed.
    pub fn complete_onboarding(&mut self) -> Result<View> {
        if self.view != View::Onboarding || self.onboarded {
            return Err(self.reject("complete onboarding"));
        }
        self.onboarded = true;
        self.view = View::MoodCapture;
        Ok(self.view)
    }

    /// MoodCapture -> Tasks, writing the confirmed mood.
    pub fn confirm_mood(&mut self, mood: Mood) -> Result<View> {
        if self.view != View::MoodCapture || !self.onboarded {
            return Err(self.reject("confirm a mood"));
        }
        let previous = self.mood.set(mood);
        tracing::debug!(%previous, %mood, "Mood confirmed");
        self.view = View::Tasks;
        Ok(self.view)
    }

    /// Move between MoodCapture, Tasks and Insights.
    pub fn navigate(&mut self, target: View) -> Result<View> {
        if !self.navigation_visible() {
            return Err(self.reject("navigate before onboarding is complete"));
        }
        if !target.is_lateral() {
            return Err(PulseError::InvalidTransition(format!(
                "{target:?} is not reachable from the navigation bar"
            )));
        }
        self.view = target;
        Ok(self.view)
    }

    /// Companion side channel. Changes the mood without changing the view.
    pub fn update_mood(&mut self, mood: Mood) -> Result<Mood> {
        if !self.navigation_visible() {
            return Err(self.reject("update the mood"));
        }
        self.mood.set(mood);
        Ok(mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onboarded() -> Navigator {
        let mut nav = Navigator::new();
        nav.get_started().unwrap();
        nav.complete_onboarding().unwrap();
        nav
    }

    #[test]
    fn starts_on_splash_with_neutral_mood() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), View::Splash);
        assert_eq!(nav.mood(), Mood::Neutral);
        assert!(!nav.navigation_visible());
    }

    #[test]
    fn happy_path() {
        let mut nav = Navigator::new();
        assert_eq!(nav.get_started().unwrap(), View::Onboarding);
        assert!(!nav.navigation_visible());
        assert_eq!(nav.complete_onboarding().unwrap(), View::MoodCapture);
        assert!(nav.navigation_visible());
        assert_eq!(nav.confirm_mood(Mood::Focused).unwrap(), View::Tasks);
        assert_eq!(nav.mood(), Mood::Focused);
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        let mut nav = Navigator::new();
        assert!(nav.complete_onboarding().is_err());
        assert!(nav.confirm_mood(Mood::Happy).is_err());
        assert_eq!(nav.view(), View::Splash);

        nav.get_started().unwrap();
        assert!(nav.get_started().is_err());
        assert!(nav.confirm_mood(Mood::Happy).is_err());
        assert_eq!(nav.view(), View::Onboarding);
        assert_eq!(nav.mood(), Mood::Neutral);
    }

    #[test]
    fn lateral_moves_need_onboarding() {
        let mut nav = Navigator::new();
        nav.get_started().unwrap();
        assert!(matches!(
            nav.navigate(View::Insights),
            Err(PulseError::InvalidTransition(_))
        ));
        assert_eq!(nav.view(), View::Onboarding);
    }

    #[test]
    fn lateral_moves_stay_within_the_bar() {
        let mut nav = onboarded();
        assert_eq!(nav.navigate(View::Insights).unwrap(), View::Insights);
        assert_eq!(nav.navigate(View::Tasks).unwrap(), View::Tasks);
        assert_eq!(nav.navigate(View::MoodCapture).unwrap(), View::MoodCapture);
        assert!(nav.navigate(View::Splash).is_err());
        assert!(nav.navigate(View::Onboarding).is_err());
        assert_eq!(nav.view(), View::MoodCapture);
    }

    #[test]
    fn side_channel_keeps_view() {
        let mut nav = onboarded();
        nav.confirm_mood(Mood::Happy).unwrap();
        nav.navigate(View::Insights).unwrap();
        nav.update_mood(Mood::Sad).unwrap();
        assert_eq!(nav.view(), View::Insights);
        assert_eq!(nav.mood(), Mood::Sad);
    }

    #[test]
    fn side_channel_before_onboarding_is_rejected() {
        let mut nav = Navigator::new();
        assert!(nav.update_mood(Mood::Sad).is_err());
        assert_eq!(nav.mood(), Mood::Neutral);
    }

    #[tokio::test]
    async fn every_watcher_sees_the_update() {
        let mut nav = onboarded();
        let tasks_view = nav.watch_mood();
        let mut insights_view = nav.watch_mood();

        nav.update_mood(Mood::Sad).unwrap();

        assert_eq!(tasks_view.current(), Mood::Sad);
        assert_eq!(insights_view.changed().await.unwrap(), Mood::Sad);
    }
}
