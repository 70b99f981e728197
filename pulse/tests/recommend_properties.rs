mod common;

use pretty_assertions::assert_eq;
use pulse::intelligence::recommend;
use pulse::intelligence::registry::{metadata_for, metadata_for_key};
use pulse::intelligence::suggestions::{tasks_for_key, tasks_for_mood};
use pulse::models::{Mood, Task, TaskCategory};

use common::{completed, task};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.title.as_str()).collect()
}

fn mixed_tasks() -> Vec<Task> {
    vec![
        task("report", 4, TaskCategory::Work),
        completed(task("gym", 3, TaskCategory::Physical)),
        task("call mom", 2, TaskCategory::Social),
        task("sketch", 3, TaskCategory::Creative),
        completed(task("bath", 1, TaskCategory::SelfCare)),
        task("journal", 1, TaskCategory::SelfCare),
        task("run", 5, TaskCategory::Physical),
        task("groceries", 3, TaskCategory::Personal),
    ]
}

#[test]
fn every_mood_has_metadata_and_unknown_keys_fall_back_to_neutral() {
    for mood in Mood::ALL {
        assert_eq!(metadata_for(mood).mood, mood);
        assert_eq!(metadata_for_key(mood.as_str()).mood, mood);
    }
    let neutral = metadata_for(Mood::Neutral);
    for key in ["", "ecstatic", "HAPPY!", "null"] {
        assert_eq!(metadata_for_key(key), neutral);
    }
}

#[test]
fn completed_tasks_are_never_recommended() {
    let tasks = mixed_tasks();
    let open = tasks.iter().filter(|t| !t.completed).count();

    for mood in Mood::ALL {
        let out = recommend(mood, &tasks);
        assert_eq!(out.len(), open, "mood {mood}");
        assert!(out.iter().all(|t| !t.completed), "mood {mood}");
    }
}

#[test]
fn recommend_is_deterministic() {
    let tasks = mixed_tasks();
    for mood in Mood::ALL {
        assert_eq!(recommend(mood, &tasks), recommend(mood, &tasks));
    }
}

#[test]
fn equal_scores_keep_input_order() {
    // All importance 3, none in an affinity category for neutral.
    let tasks = vec![
        task("first", 3, TaskCategory::Personal),
        task("second", 3, TaskCategory::Work),
        task("third", 3, TaskCategory::Health),
    ];
    assert_eq!(
        titles(&recommend(Mood::Neutral, &tasks)),
        vec!["first", "second", "third"]
    );

    // Focused: both work tasks score 5 and keep their relative order.
    let tasks = vec![
        task("email", 1, TaskCategory::Work),
        task("plan", 4, TaskCategory::Personal),
        task("deploy", 2, TaskCategory::Work),
    ];
    assert_eq!(
        titles(&recommend(Mood::Focused, &tasks)),
        vec!["email", "deploy", "plan"]
    );
}

#[test]
fn stressed_puts_easy_tasks_first() {
    let tasks = vec![
        task("a", 2, TaskCategory::Work),
        task("b", 4, TaskCategory::Physical),
    ];
    assert_eq!(titles(&recommend(Mood::Stressed, &tasks)), vec!["a", "b"]);
}

#[test]
fn energetic_boosts_physical_tasks() {
    let tasks = vec![
        task("a", 2, TaskCategory::Work),
        task("b", 4, TaskCategory::Physical),
    ];
    assert_eq!(titles(&recommend(Mood::Energetic, &tasks)), vec!["b", "a"]);
}

#[test]
fn sad_favors_self_care() {
    let tasks = vec![
        task("deadline", 5, TaskCategory::Work),
        task("walk", 1, TaskCategory::SelfCare),
        task("dishes", 1, TaskCategory::Personal),
    ];
    // deadline 4, walk 5, dishes floored at 1.
    assert_eq!(
        titles(&recommend(Mood::Sad, &tasks)),
        vec!["walk", "deadline", "dishes"]
    );
}

#[test]
fn template_table_has_shared_baseline() {
    let baseline = tasks_for_mood(Mood::Neutral);
    for mood in Mood::ALL {
        let templates = tasks_for_mood(mood);
        assert_eq!(templates.len(), 5, "mood {mood}");
        assert_eq!(&templates[..3], &baseline[..3], "mood {mood}");
    }
    assert_eq!(tasks_for_key("unknown"), tasks_for_mood(Mood::Neutral));
}
