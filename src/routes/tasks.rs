use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Task, TaskInput, TaskRow, TaskStatus},
};
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use std::str::FromStr;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, description, due_date, status, user_id, created_at";

fn lift_rows(rows: Vec<TaskRow>) -> Result<Vec<Task>, AppError> {
    rows.into_iter().map(Task::try_from).collect()
}

/// Get all tasks
///
/// Retrieves every task in the store regardless of owner. Open endpoint, no
/// access control.
#[utoipa::path(
    responses(
        (status = 200, description = "A JSON array of all tasks", body = [Task]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[get("/Usertasks")]
pub async fn list_all_tasks(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let rows = sqlx::query_as::<_, TaskRow>(&format!("SELECT {} FROM tasks", TASK_COLUMNS))
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(lift_rows(rows)?))
}

/// Get tasks for a specific user
///
/// Looks the user up by username and returns the tasks they own.
#[utoipa::path(
    params(
        ("username" = String, Path, description = "The username of the user to fetch tasks for")
    ),
    responses(
        (status = 200, description = "A JSON array of tasks associated with the user", body = [Task]),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[get("/tasks/{username}")]
pub async fn list_tasks_by_username(
    pool: web::Data<SqlitePool>,
    username: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let user_id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(username.as_str())
        .fetch_optional(&**pool)
        .await?;

    let user_id = match user_id {
        Some(id) => id,
        None => return Err(AppError::NotFound("User not found".into())),
    };

    let rows = sqlx::query_as::<_, TaskRow>(&format!(
        "SELECT {} FROM tasks WHERE user_id = ?",
        TASK_COLUMNS
    ))
    .bind(user_id)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(lift_rows(rows)?))
}

/// Create a new task
///
/// The owner is always the authenticated caller; the request body cannot
/// assign the task to another user.
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = TaskInput,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Users Operations"
)]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    body: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = Task::new(body.into_inner(), user.0);

    sqlx::query(&format!(
        "INSERT INTO tasks ({}) VALUES (?, ?, ?, ?, ?, ?, ?)",
        TASK_COLUMNS
    ))
    .bind(task.id.to_string())
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.due_date)
    .bind(task.status.as_str())
    .bind(task.user_id)
    .bind(task.created_at)
    .execute(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Get tasks for the logged-in user
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "A JSON array of the caller's tasks", body = [Task]),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Users Operations"
)]
pub async fn list_my_tasks(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let rows = sqlx::query_as::<_, TaskRow>(&format!(
        "SELECT {} FROM tasks WHERE user_id = ?",
        TASK_COLUMNS
    ))
    .bind(user.0)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(lift_rows(rows)?))
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    status: Option<String>,
}

/// Update the status of a task
///
/// Any authenticated user may update any task's status; concurrent updates are
/// last-write-wins. The lookup happens before the status value is validated,
/// so an unknown task id wins over a bad status value.
#[utoipa::path(
    put,
    path = "/tasks/{taskId}/status",
    params(
        ("taskId" = String, Path, description = "ID of the task to update"),
        ("status" = String, Query, description = "New status for the task (TODO, IN_PROGRESS, DONE)")
    ),
    responses(
        (status = 200, description = "Task status updated successfully"),
        (status = 400, description = "Invalid status value"),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Users Operations"
)]
pub async fn update_task_status(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<Uuid>,
    query: web::Query<StatusQuery>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    let existing: Option<String> = sqlx::query_scalar("SELECT id FROM tasks WHERE id = ?")
        .bind(task_id.to_string())
        .fetch_optional(&**pool)
        .await?;

    if existing.is_none() {
        return Err(AppError::NotFound("Task not found".into()));
    }

    let status = query
        .status
        .as_deref()
        .and_then(|s| TaskStatus::from_str(s).ok())
        .ok_or_else(|| AppError::BadRequest("Invalid status value".into()))?;

    sqlx::query("UPDATE tasks SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(task_id.to_string())
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task status updated successfully"
    })))
}
