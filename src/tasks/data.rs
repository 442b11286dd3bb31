use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api_error::{ApiError, ApiResult};
use crate::data::parse_date;

pub type TaskID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<TaskPriority> {
        match s {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<TaskStatus> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(with = "crate::data::id_string")]
    pub id: TaskID,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl CreateTaskRequest {
    pub fn validate(self) -> ApiResult<NewTask> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(ApiError::Validation("title is required".to_string())),
        };

        let priority = match self.priority {
            None => TaskPriority::Medium,
            Some(raw) => TaskPriority::from_str(&raw)
                .ok_or_else(|| ApiError::Validation(format!("unknown priority '{}'", raw)))?,
        };

        let status = match self.status {
            None => TaskStatus::Pending,
            Some(raw) => TaskStatus::from_str(&raw)
                .ok_or_else(|| ApiError::Validation(format!("unknown status '{}'", raw)))?,
        };

        let due_date = match self.due_date {
            None => None,
            Some(raw) => Some(
                parse_date(&raw)
                    .ok_or_else(|| ApiError::Validation(format!("invalid dueDate '{}'", raw)))?,
            ),
        };

        Ok(NewTask {
            title,
            description: self.description,
            priority,
            status,
            due_date,
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl TaskUpdate {
    /// Merges the present fields into the stored record, one field at a time.
    pub fn apply(self, task: &mut Task) -> ApiResult<()> {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(raw) = self.priority {
            task.priority = TaskPriority::from_str(&raw)
                .ok_or_else(|| ApiError::Validation(format!("unknown priority '{}'", raw)))?;
        }
        if let Some(raw) = self.status {
            task.status = TaskStatus::from_str(&raw)
                .ok_or_else(|| ApiError::Validation(format!("unknown status '{}'", raw)))?;
        }
        if let Some(raw) = self.due_date {
            task.due_date = Some(
                parse_date(&raw)
                    .ok_or_else(|| ApiError::Validation(format!("invalid dueDate '{}'", raw)))?,
            );
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteTaskResponse {
    pub message: String,
}
