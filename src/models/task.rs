use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

/// Represents the status of a task. Stored as TEXT in the `tasks` table and
/// rendered as `TODO` / `IN_PROGRESS` / `DONE` on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task is yet to be started. The initial state of every task.
    #[default]
    Todo,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(TaskStatus::Todo),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            other => Err(format!("unknown task status: {}", other)),
        }
    }
}

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// The title of the task.
    pub title: String,

    /// An optional description for the task.
    pub description: Option<String>,

    /// Due date as an opaque string. No format validation is performed.
    pub due_date: String,

    /// The status of the task. Defaults to `TODO` when omitted.
    #[serde(default)]
    pub status: TaskStatus,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// An optional description for the task.
    pub description: Option<String>,
    /// Due date as an opaque string.
    pub due_date: String,
    /// The current status of the task.
    pub status: TaskStatus,
    /// Identifier of the user who owns the task.
    pub user_id: i64,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
}

/// Raw row shape for the `tasks` table. SQLite stores the id and status as
/// TEXT; `TryFrom` lifts a row into the typed `Task`.
#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = AppError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| AppError::InternalServerError(format!("corrupt task id: {}", e)))?,
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            status: TaskStatus::from_str(&row.status)
                .map_err(|e| AppError::InternalServerError(format!("corrupt task row: {}", e)))?,
            user_id: row.user_id,
            created_at: row.created_at,
        })
    }
}

impl Task {
    /// Creates a new `Task` from `TaskInput` and the owner's user id.
    /// Sets `id` to a fresh UUID and `created_at` to the current time.
    pub fn new(input: TaskInput, user_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
            user_id,
            created_at: Utc::now(),
        }
    }
}
