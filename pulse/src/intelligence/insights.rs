//! Static insights dashboard.
//!
//! Everything except the mood banner is sample data. The banner is read from
//! the session's shared mood at request time.

use crate::models::Mood;

use super::registry::{metadata_for, MoodMetadata};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKLY_ACTIVITY: [u8; 7] = [60, 85, 75, 90, 65, 40, 30];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub day: &'static str,
    /// Percentage of the weekly peak, 0 to 100.
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insight {
    pub title: &'static str,
    pub description: &'static str,
    /// Mood whose color the card is drawn in.
    pub accent: Mood,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySummary {
    pub tasks_completed: u32,
    pub focus_hours: f32,
    pub wellness_breaks: u32,
    pub average_mood_score: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub mood: &'static MoodMetadata,
    pub week_over_week: &'static str,
    pub weekly_activity: Vec<DayActivity>,
    pub insights: [Insight; 3],
    pub summary: WeeklySummary,
}

const INSIGHTS: [Insight; 3] = [
    Insight {
        title: "Peak Productivity Time",
        description: "You're most productive between 9-11 AM when feeling focused",
        accent: Mood::Focused,
    },
    Insight {
        title: "Mood Patterns",
        description: "You tend to feel most energetic on Tuesdays and Wednesdays",
        accent: Mood::Energetic,
    },
    Insight {
        title: "Task Completion Rate",
        description: "85% completion rate when starting with easier tasks",
        accent: Mood::Motivated,
    },
];

const SUMMARY: WeeklySummary = WeeklySummary {
    tasks_completed: 47,
    focus_hours: 8.2,
    wellness_breaks: 12,
    average_mood_score: 4.8,
};

pub fn weekly_activity() -> Vec<DayActivity> {
    WEEKDAYS
        .into_iter()
        .zip(WEEKLY_ACTIVITY)
        .map(|(day, percent)| DayActivity { day, percent })
        .collect()
}

pub fn dashboard(mood: Mood) -> Dashboard {
    Dashboard {
        mood: metadata_for(mood),
        week_over_week: "+23% vs last week",
        weekly_activity: weekly_activity(),
        insights: INSIGHTS,
        summary: SUMMARY,
    }
}
