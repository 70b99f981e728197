use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PulseError, Result};

/// Task importance on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Importance(u8);

impl Importance {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PulseError::Validation(format!(
                "Importance must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Low",
            2 => "Medium-Low",
            3 => "Medium",
            4 => "High",
            _ => "Critical",
        }
    }
}

impl Default for Importance {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Importance {
    type Error = PulseError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Importance> for u8 {
    fn from(importance: Importance) -> Self {
        importance.0
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    Work,
    #[default]
    Personal,
    Health,
    Social,
    Creative,
    Physical,
    SelfCare,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
pub enum EstimatedTime {
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[default]
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "1hr")]
    OneHour,
    #[serde(rename = "2hr")]
    TwoHours,
    #[serde(rename = "4hr")]
    FourHoursPlus,
}

impl EstimatedTime {
    pub fn label(&self) -> &'static str {
        match self {
            EstimatedTime::FifteenMinutes => "15 minutes",
            EstimatedTime::ThirtyMinutes => "30 minutes",
            EstimatedTime::OneHour => "1 hour",
            EstimatedTime::TwoHours => "2 hours",
            EstimatedTime::FourHoursPlus => "4+ hours",
        }
    }
}

/// A user-created task, owned by the session that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub importance: Importance,
    pub estimated_time: EstimatedTime,
    pub deadline: Option<NaiveDate>,
    pub category: TaskCategory,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task. Unset fields take the form defaults.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub importance: Importance,
    pub estimated_time: EstimatedTime,
    pub deadline: Option<NaiveDate>,
    pub category: TaskCategory,
}

impl Task {
    pub fn new(input: NewTask) -> Result<Self> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(PulseError::Validation(
                "Task title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: input.description,
            importance: input.importance,
            estimated_time: input.estimated_time,
            deadline: input.deadline,
            category: input.category,
            completed: false,
            created_at: Utc::now(),
        })
    }
}

/// The tasks of one session, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, input: NewTask) -> Result<&Task> {
        let task = Task::new(input)?;
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn toggle(&mut self, id: Uuid) -> Result<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PulseError::NotFound(format!("Task {id} not found")))?;
        task.completed = !task.completed;
        Ok(task)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| PulseError::NotFound(format!("Task {id} not found")))?;
        Ok(self.tasks.remove(index))
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
