//! Task DTOs for the v1 API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{EstimatedTime, Importance, Mood, NewTask, Task, TaskCategory};

/// Request body for `POST /sessions/{id}/tasks`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    /// 1–5, defaults to 3.
    pub importance: Option<u8>,
    pub estimated_time: Option<EstimatedTime>,
    #[schema(value_type = Option<String>, format = Date)]
    pub deadline: Option<NaiveDate>,
    pub category: Option<TaskCategory>,
}

impl CreateTaskRequest {
    /// Fill in form defaults and check the importance range.
    pub fn into_new_task(self) -> Result<NewTask> {
        let importance = match self.importance {
            Some(value) => Importance::new(value)?,
            None => Importance::default(),
        };
        Ok(NewTask {
            title: self.title,
            description: self.description.unwrap_or_default(),
            importance,
            estimated_time: self.estimated_time.unwrap_or_default(),
            deadline: self.deadline,
            category: self.category.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[schema(value_type = String)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub importance: u8,
    pub importance_label: String,
    pub estimated_time: EstimatedTime,
    pub estimated_time_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub deadline: Option<NaiveDate>,
    pub category: TaskCategory,
    pub completed: bool,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            importance: task.importance.value(),
            importance_label: task.importance.label().to_string(),
            estimated_time: task.estimated_time,
            estimated_time_label: task.estimated_time.label().to_string(),
            deadline: task.deadline,
            category: task.category,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Incomplete tasks ordered for the current mood, plus the completed ones.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskListResponse {
    pub mood: Mood,
    /// Advice line shown next to each task for this mood.
    pub advice: String,
    pub recommended: Vec<TaskResponse>,
    pub completed: Vec<TaskResponse>,
}
