#![allow(dead_code)]

use pulse::config::{ClassifierConfig, Config, ServerConfig, SessionConfig, SuggestionsConfig};
use pulse::flow::ProfilePatch;
use pulse::models::{Gender, Importance, NewTask, Task, TaskCategory, WorkSchedule};

/// Smallest payload `infer` recognizes as a PNG.
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// Config with no artificial delays.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_image_bytes: 64 * 1024,
        },
        classifier: ClassifierConfig {
            simulated_delay_ms: 0,
            ..Default::default()
        },
        session: SessionConfig {
            idle_timeout_secs: 3600,
            sweep_interval_secs: 60,
        },
        suggestions: SuggestionsConfig {
            refresh_delay_ms: 0,
        },
    }
}

/// Everything steps 1 and 2 require.
pub fn required_fields(gender: Gender) -> ProfilePatch {
    ProfilePatch {
        name: Some("Riley".to_string()),
        age: Some(34),
        gender: Some(gender),
        occupation: Some("Engineer".to_string()),
        work_schedule: Some(WorkSchedule::Flexible),
        ..Default::default()
    }
}

pub fn task(title: &str, importance: u8, category: TaskCategory) -> Task {
    Task::new(NewTask {
        title: title.to_string(),
        importance: Importance::new(importance).expect("importance in range"),
        category,
        ..Default::default()
    })
    .expect("valid task")
}

pub fn completed(mut task: Task) -> Task {
    task.completed = true;
    task
}
