use crate::{
    auth::AuthenticatedUser,
    error::{ApiError, ErrorBody},
    models::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest},
    response::{ApiResponse, ApiResponseBuilder},
};
use actix_web::{delete, get, http::StatusCode, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

/// Ensures the acting user still exists before any task write.
async fn ensure_user_exists(pool: &PgPool, user_id: i32) -> Result<(), ApiError> {
    let user: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    match user {
        Some(_) => Ok(()),
        None => Err(ApiError::BadRequest("User not found".into())),
    }
}

/// Ownership gate for mutate/delete: a missing task and a task owned by
/// someone else fail identically as 403 "Not Allowed Action", so callers
/// cannot probe which ids exist.
async fn ensure_task_owner(pool: &PgPool, task_id: Uuid, user_id: i32) -> Result<(), ApiError> {
    let owner: Option<(i32,)> = sqlx::query_as("SELECT user_id FROM tasks WHERE id = $1")
        .bind(task_id)
        .fetch_optional(pool)
        .await?;

    match owner {
        Some((owner_id,)) if owner_id == user_id => Ok(()),
        _ => Err(ApiError::Custom(
            StatusCode::FORBIDDEN,
            "Not Allowed Action".into(),
        )),
    }
}

/// Create a new task
///
/// The task is owned by the authenticated user and starts in the pending
/// status. Title is required; description defaults to empty.
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task created", body = ApiResponse),
        (status = 400, description = "Missing title or unknown user", body = ErrorBody),
        (status = 401, description = "Missing or invalid token cookie", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    body: web::Json<CreateTaskRequest>,
    user: AuthenticatedUser,
) -> Result<impl Responder, ApiError> {
    ensure_user_exists(&pool, user.0).await?;

    let body = body.into_inner();
    let title = body
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Title is required".into()))?;

    let task = Task::new(title, body.description, user.0);

    let created: Task = sqlx::query_as(
        "INSERT INTO tasks (id, title, description, status, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, title, description, status, user_id, created_at, updated_at",
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.status)
    .bind(task.user_id)
    .bind(task.created_at)
    .bind(task.updated_at)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .message("Task created successfully")
            .data(serde_json::to_value(created)?)
            .build(),
    ))
}

/// Fetch all tasks
///
/// Public listing of every task, newest first.
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All tasks, newest first", body = ApiResponse)
    ),
    tags = ["tasks"],
    operation_id = "listTasks",
    security([])
)]
#[get("")]
pub async fn list_tasks(pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let tasks: Vec<Task> = sqlx::query_as(
        "SELECT id, title, description, status, user_id, created_at, updated_at
         FROM tasks ORDER BY created_at DESC",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .message("Tasks fetched successfully")
            .data(serde_json::to_value(tasks)?)
            .build(),
    ))
}

/// Fetch a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = ApiResponse),
        (status = 404, description = "No task with this id", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "getTask",
    security([])
)]
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let task: Option<Task> = sqlx::query_as(
        "SELECT id, title, description, status, user_id, created_at, updated_at
         FROM tasks WHERE id = $1",
    )
    .bind(task_id.into_inner())
    .fetch_optional(&**pool)
    .await?;

    let task = match task {
        Some(task) => task,
        None => return Err(ApiError::NotFound("Task not found".into())),
    };

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .message("Task fetched successfully")
            .data(serde_json::to_value(task)?)
            .build(),
    ))
}

/// Update the status of a task
///
/// Only the owner may update; the ownership check runs before any mutation,
/// so a forbidden request leaves the task untouched.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = Uuid, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = ApiResponse),
        (status = 400, description = "Missing status or unknown user", body = ErrorBody),
        (status = 401, description = "Missing or invalid token cookie", body = ErrorBody),
        (status = 403, description = "Task missing or owned by someone else", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    body: web::Json<UpdateTaskRequest>,
    user: AuthenticatedUser,
) -> Result<impl Responder, ApiError> {
    ensure_user_exists(&pool, user.0).await?;

    let task_id = task_id.into_inner();
    ensure_task_owner(&pool, task_id, user.0).await?;

    let status: TaskStatus = body
        .into_inner()
        .status
        .ok_or_else(|| ApiError::BadRequest("Status is required".into()))?;

    let updated: Task = sqlx::query_as(
        "UPDATE tasks SET status = $1, updated_at = NOW()
         WHERE id = $2 AND user_id = $3
         RETURNING id, title, description, status, user_id, created_at, updated_at",
    )
    .bind(&status)
    .bind(task_id)
    .bind(user.0)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .message("Task updated successfully")
            .data(serde_json::to_value(updated)?)
            .build(),
    ))
}

/// Delete a task
///
/// Same ownership rule as update: non-owners get 403 and nothing is removed.
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = Uuid, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = ApiResponse),
        (status = 401, description = "Missing or invalid token cookie", body = ErrorBody),
        (status = 403, description = "Task missing or owned by someone else", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, ApiError> {
    ensure_user_exists(&pool, user.0).await?;

    let task_id = task_id.into_inner();
    ensure_task_owner(&pool, task_id, user.0).await?;

    sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
        .bind(task_id)
        .bind(user.0)
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(
        ApiResponseBuilder::new()
            .message("Task deleted successfully")
            .build(),
    ))
}
