use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task is yet to be started. The default for new tasks.
    Pending,
    /// Task is currently being worked on.
    InProgress,
    /// Task is finished.
    Completed,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// Free-form description; empty when none was supplied.
    pub description: String,
    /// The current status of the task.
    pub status: TaskStatus,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /tasks`. Title presence is checked in the handler so the
/// failure surfaces as 400 "Title is required".
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /tasks/{id}`: only the status can change.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub status: Option<TaskStatus>,
}

impl Task {
    /// Creates a new pending task owned by `user_id`, stamping id and
    /// timestamps. A missing description becomes the empty string.
    pub fn new(title: String, description: Option<String>, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: description.unwrap_or_default(),
            status: TaskStatus::Pending,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
