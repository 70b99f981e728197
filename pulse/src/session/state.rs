use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{PulseError, Result};
use crate::flow::{Advance, Navigator, OnboardingStep, OnboardingWizard, ProfilePatch, View};
use crate::intelligence::suggestions::{tasks_for_mood, WELLNESS_NUDGES};
use crate::models::{EmotionResult, Mood, NewTask, Task, TaskList, UserProfile};

/// Mood-capture screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodCapture {
    /// Picked on the grid but not yet confirmed.
    pub selected: Option<Mood>,
    pub detected: Option<EmotionResult>,
    /// A classification is in flight.
    pub pending: bool,
}

/// Tick state of the fixed daily plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyPlan {
    completed_templates: BTreeSet<String>,
    completed_nudges: BTreeSet<usize>,
    refreshing: bool,
}

impl DailyPlan {
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn template_done(&self, id: &str) -> bool {
        self.completed_templates.contains(id)
    }

    pub fn nudge_done(&self, index: usize) -> bool {
        self.completed_nudges.contains(&index)
    }

    pub fn completed_templates(&self) -> usize {
        self.completed_templates.len()
    }

    /// Flip a template tick. Returns the new state.
    pub fn toggle_template(&mut self, mood: Mood, id: &str) -> Result<bool> {
        if !tasks_for_mood(mood).iter().any(|t| t.id == id) {
            return Err(PulseError::NotFound(format!("Suggestion {id} not found")));
        }
        Ok(toggle(&mut self.completed_templates, id.to_string()))
    }

    pub fn toggle_nudge(&mut self, index: usize) -> Result<bool> {
        if index >= WELLNESS_NUDGES.len() {
            return Err(PulseError::NotFound(format!("Nudge {index} not found")));
        }
        Ok(toggle(&mut self.completed_nudges, index))
    }

    fn clear(&mut self) {
        self.completed_templates.clear();
        self.completed_nudges.clear();
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, item: T) -> bool {
    if set.remove(&item) {
        false
    } else {
        set.insert(item);
        true
    }
}

/// Everything one client works with. Dropping the session drops its tasks.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
    navigator: Navigator,
    onboarding: OnboardingWizard,
    profile: Option<UserProfile>,
    tasks: TaskList,
    capture: MoodCapture,
    plan: DailyPlan,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            last_active: now,
            navigator: Navigator::new(),
            onboarding: OnboardingWizard::new(),
            profile: None,
            tasks: TaskList::new(),
            capture: MoodCapture::default(),
            plan: DailyPlan::default(),
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn onboarding(&self) -> &OnboardingWizard {
        &self.onboarding
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn capture(&self) -> &MoodCapture {
        &self.capture
    }

    pub fn plan(&self) -> &DailyPlan {
        &self.plan
    }

    pub fn mood(&self) -> Mood {
        self.navigator.mood()
    }

    fn ensure_view(&self, view: View, action: &str) -> Result<()> {
        if self.navigator.view() != view {
            return Err(PulseError::InvalidTransition(format!(
                "Cannot {action} while on {:?}",
                self.navigator.view()
            )));
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<View> {
        self.navigator.get_started()
    }

    pub fn patch_onboarding(&mut self, patch: ProfilePatch) -> Result<()> {
        self.ensure_view(View::Onboarding, "edit the profile")?;
        self.onboarding.apply(patch)
    }

    pub fn onboarding_next(&mut self) -> Result<Advance> {
        self.ensure_view(View::Onboarding, "advance onboarding")?;
        self.onboarding.next()
    }

    pub fn onboarding_back(&mut self) -> Result<OnboardingStep> {
        self.ensure_view(View::Onboarding, "go back in onboarding")?;
        self.onboarding.back()
    }

    /// Commit the profile and move on to mood capture.
    pub fn finish_onboarding(&mut self) -> Result<&UserProfile> {
        self.ensure_view(View::Onboarding, "finish onboarding")?;
        let profile = self.onboarding.finish()?;
        self.navigator.complete_onboarding()?;
        Ok(self.profile.insert(profile))
    }

    pub fn select_mood(&mut self, mood: Mood) -> Result<()> {
        self.ensure_view(View::MoodCapture, "select a mood")?;
        self.capture.selected = Some(mood);
        Ok(())
    }

    pub fn confirm_mood(&mut self, mood: Mood) -> Result<View> {
        let view = self.navigator.confirm_mood(mood)?;
        self.capture.selected = None;
        Ok(view)
    }

    /// Confirm whatever the classifier last detected.
    pub fn accept_detected(&mut self) -> Result<View> {
        let mood = self
            .capture
            .detected
            .as_ref()
            .map(|d| d.emotion)
            .ok_or_else(|| {
                PulseError::InvalidTransition("No detected mood to accept".to_string())
            })?;
        self.confirm_mood(mood)
    }

    pub fn navigate(&mut self, view: View) -> Result<View> {
        self.navigator.navigate(view)
    }

    pub fn update_mood(&mut self, mood: Mood) -> Result<Mood> {
        self.navigator.update_mood(mood)
    }

    pub fn begin_analysis(&mut self) -> Result<()> {
        self.ensure_view(View::MoodCapture, "analyze an image")?;
        if self.capture.pending {
            return Err(PulseError::InvalidTransition(
                "An image is already being analyzed".to_string(),
            ));
        }
        self.capture.pending = true;
        Ok(())
    }

    pub fn finish_analysis(&mut self, result: EmotionResult) {
        self.capture.pending = false;
        self.capture.selected = Some(result.emotion);
        self.capture.detected = Some(result);
    }

    pub fn add_task(&mut self, input: NewTask) -> Result<&Task> {
        self.tasks.add(input)
    }

    pub fn toggle_task(&mut self, id: Uuid) -> Result<&Task> {
        self.tasks.toggle(id)
    }

    pub fn delete_task(&mut self, id: Uuid) -> Result<Task> {
        self.tasks.delete(id)
    }

    pub fn toggle_template(&mut self, id: &str) -> Result<bool> {
        let mood = self.mood();
        self.plan.toggle_template(mood, id)
    }

    pub fn toggle_nudge(&mut self, index: usize) -> Result<bool> {
        self.plan.toggle_nudge(index)
    }

    pub fn begin_refresh(&mut self) -> Result<()> {
        if self.plan.refreshing {
            return Err(PulseError::InvalidTransition(
                "The plan is already refreshing".to_string(),
            ));
        }
        self.plan.refreshing = true;
        Ok(())
    }

    pub fn finish_refresh(&mut self) {
        self.plan.clear();
        self.plan.refreshing = false;
    }
}
