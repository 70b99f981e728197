//! Mood-driven ordering of a user's open tasks.
//!
//! Each mood maps to one named scoring function. [`recommend`] drops
//! completed tasks, scores the rest and sorts by score, highest first. The
//! sort is stable, so equal scores keep their input order.

use std::cmp::Reverse;

use crate::models::{Mood, Task, TaskCategory};

/// Flat score for a task in the mood's affinity category.
pub const AFFINITY_SCORE: i32 = 5;

pub type Scorer = fn(&Task) -> i32;

fn importance(task: &Task) -> i32 {
    i32::from(task.importance.value())
}

/// Easiest first: `6 - importance`.
pub fn score_easy_first(task: &Task) -> i32 {
    6 - importance(task)
}

/// Physical tasks get `+2`.
pub fn score_energetic(task: &Task) -> i32 {
    if task.category == TaskCategory::Physical {
        importance(task) + 2
    } else {
        importance(task)
    }
}

pub fn score_motivated(task: &Task) -> i32 {
    importance(task) + 1
}

pub fn score_happy(task: &Task) -> i32 {
    affinity(task, TaskCategory::Social)
}

pub fn score_focused(task: &Task) -> i32 {
    affinity(task, TaskCategory::Work)
}

/// Shared by calm and creative, both of which lean toward creative work.
pub fn score_creative_affinity(task: &Task) -> i32 {
    affinity(task, TaskCategory::Creative)
}

/// Self-care gets the flat score; everything else is damped by one, floored at 1.
pub fn score_sad(task: &Task) -> i32 {
    if task.category == TaskCategory::SelfCare {
        AFFINITY_SCORE
    } else {
        (importance(task) - 1).max(1)
    }
}

pub fn score_neutral(task: &Task) -> i32 {
    importance(task)
}

fn affinity(task: &Task, category: TaskCategory) -> i32 {
    if task.category == category {
        AFFINITY_SCORE
    } else {
        importance(task)
    }
}

pub fn scorer_for(mood: Mood) -> Scorer {
    match mood {
        Mood::Stressed | Mood::Tired => score_easy_first,
        Mood::Energetic => score_energetic,
        Mood::Motivated => score_motivated,
        Mood::Happy => score_happy,
        Mood::Focused => score_focused,
        Mood::Calm | Mood::Creative => score_creative_affinity,
        Mood::Sad => score_sad,
        Mood::Neutral => score_neutral,
    }
}

pub fn recommend(mood: Mood, tasks: &[Task]) -> Vec<Task> {
    let scorer = scorer_for(mood);
    let mut open: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    open.sort_by_key(|t| Reverse(scorer(t)));
    open.into_iter().cloned().collect()
}
