//! Fixed daily-suggestion tables.
//!
//! These feed only the daily plan view. User tasks are ordered by
//! [`super::recommend`] instead.

use serde::Serialize;

use crate::models::Mood;

const INTENSE_THRESHOLD: f32 = 0.8;
const GENTLE_THRESHOLD: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub priority: Priority,
    pub estimated: &'static str,
}

const fn template(
    id: &'static str,
    title: &'static str,
    priority: Priority,
    estimated: &'static str,
) -> TaskTemplate {
    TaskTemplate {
        id,
        title,
        priority,
        estimated,
    }
}

const BASELINE: [TaskTemplate; 3] = [
    template("1", "Review morning emails", Priority::Medium, "15 min"),
    template("2", "Update project dashboard", Priority::High, "30 min"),
    template("3", "Team standup meeting", Priority::High, "15 min"),
];

fn mood_templates(mood: Mood) -> [TaskTemplate; 2] {
    use Priority::*;
    match mood {
        Mood::Happy => [
            template("4", "Tackle that challenging project", High, "2 hours"),
            template("5", "Reach out to colleagues for collaboration", Medium, "20 min"),
        ],
        Mood::Focused => [
            template("4", "Deep work session - complex analysis", High, "3 hours"),
            template("5", "Documentation writing", Medium, "1 hour"),
        ],
        Mood::Stressed => [
            template("4", "Break down large task into smaller steps", Medium, "20 min"),
            template("5", "Quick wins - easy tasks first", Low, "30 min"),
        ],
        Mood::Tired => [
            template("4", "Light administrative tasks", Low, "45 min"),
            template("5", "Organize workspace and files", Low, "25 min"),
        ],
        Mood::Energetic => [
            template("4", "Brainstorm new project ideas", High, "1 hour"),
            template("5", "Exercise or take energetic walk", Medium, "30 min"),
        ],
        Mood::Creative => [
            template("4", "Creative brainstorming session", High, "90 min"),
            template("5", "Explore new tools or approaches", Medium, "45 min"),
        ],
        Mood::Calm => [
            template("4", "Mindful task planning", Medium, "20 min"),
            template("5", "Gentle progress on ongoing projects", Medium, "1 hour"),
        ],
        Mood::Motivated => [
            template("4", "Start that important project", High, "2 hours"),
            template("5", "Set and review personal goals", High, "30 min"),
        ],
        Mood::Neutral => [
            template("4", "Regular task maintenance", Medium, "1 hour"),
            template("5", "Catch up on industry reading", Low, "30 min"),
        ],
        Mood::Sad => [
            template("4", "Self-care and gentle activities", Low, "30 min"),
            template("5", "Connect with supportive colleagues", Medium, "15 min"),
        ],
    }
}

/// Three baseline templates followed by the mood's own two.
pub fn tasks_for_mood(mood: Mood) -> Vec<TaskTemplate> {
    BASELINE
        .iter()
        .copied()
        .chain(mood_templates(mood))
        .collect()
}

/// Template plan for a key that has not been parsed yet.
pub fn tasks_for_key(key: &str) -> Vec<TaskTemplate> {
    tasks_for_mood(Mood::from_key(key))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellnessNudge {
    pub text: &'static str,
    pub action: &'static str,
}

pub const WELLNESS_NUDGES: [WellnessNudge; 4] = [
    WellnessNudge {
        text: "Drink a glass of water",
        action: "Hydrate now",
    },
    WellnessNudge {
        text: "Take a 5-minute stretch break",
        action: "Stretch",
    },
    WellnessNudge {
        text: "Mindful 10-minute coffee break",
        action: "Take break",
    },
    WellnessNudge {
        text: "Practice 2-minute breathing exercise",
        action: "Breathe",
    },
];

fn base_tips(mood: Mood) -> [&'static str; 3] {
    match mood {
        Mood::Happy => [
            "Great time for collaborative work and team meetings",
            "Perfect for tackling creative projects",
            "Ideal moment for networking and social tasks",
        ],
        Mood::Energetic => [
            "Channel this energy into your most challenging tasks",
            "Perfect time for physical activities or exercise",
            "Great for rapid-fire task completion",
        ],
        Mood::Calm => [
            "Excellent for detailed, focused work",
            "Perfect for meditation or planning sessions",
            "Ideal for learning new skills or reading",
        ],
        Mood::Focused => [
            "Deep work sessions will be highly productive",
            "Great time for complex problem-solving",
            "Perfect for important decision-making",
        ],
        Mood::Stressed => [
            "Break large tasks into smaller, manageable chunks",
            "Consider taking short, frequent breaks",
            "Focus on organizing and planning rather than execution",
        ],
        Mood::Tired => [
            "Stick to lighter, less demanding tasks",
            "Perfect time for administrative work",
            "Consider rescheduling complex tasks for later",
        ],
        Mood::Creative => [
            "Brainstorming sessions will be highly effective",
            "Great time for artistic or design work",
            "Perfect for thinking outside the box on problems",
        ],
        Mood::Neutral => [
            "Steady progress on routine tasks works well",
            "Good time for maintenance and organization",
            "Perfect for following established processes",
        ],
        Mood::Motivated => [
            "Strike while the iron is hot - tackle big goals",
            "Perfect for starting new projects or initiatives",
            "Great time for pushing through obstacles",
        ],
        Mood::Sad => [
            "Focus on self-care and gentle tasks",
            "Perfect time for reflection and journaling",
            "Consider reaching out to supportive colleagues",
        ],
    }
}

/// Productivity tips for a mood, with one extra line when the detected
/// intensity is above 0.8 or below 0.4.
pub fn productivity_tips(mood: Mood, intensity: f32) -> Vec<&'static str> {
    let mut tips = base_tips(mood).to_vec();
    if intensity > INTENSE_THRESHOLD {
        tips.push("Your emotion is quite intense - harness this energy wisely");
    } else if intensity < GENTLE_THRESHOLD {
        tips.push("Take it slow and be gentle with yourself");
    }
    tips
}
