use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use axum_helpers::{ErrorBody, JsonBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskPayload};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(create_task, list_tasks, get_task, update_task, complete_task),
    components(schemas(Task, TaskPayload, ErrorBody)),
    tags(
        (name = "Tasks", description = "Task management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Create the tasks router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).put(update_task))
        .route("/tasks/{id}/complete", put(complete_task))
        .with_state(shared_service)
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, description = "Malformed body or validation failure", body = ErrorBody)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "All tasks in insertion order", body = Vec<Task>)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "No task with this id", body = ErrorBody)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(&id).await?;
    Ok(Json(task))
}

/// Update a task
///
/// The body must carry the same id as the URL; the record is replaced
/// wholesale, id excepted.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, description = "Malformed body, id mismatch or validation failure", body = ErrorBody),
        (status = 404, description = "No task with this id", body = ErrorBody)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> TaskResult<Json<Task>> {
    if id.is_empty() {
        return Err(TaskError::MissingId);
    }
    if payload.id != id {
        return Err(TaskError::IdMismatch);
    }

    let task = service.update_task(&id, payload).await?;
    Ok(Json(task))
}

/// Mark a task as complete
#[utoipa::path(
    put,
    path = "/tasks/{id}/complete",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task marked as completed", body = Task),
        (status = 404, description = "No task with this id", body = ErrorBody)
    )
)]
async fn complete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    let task = service.complete_task(&id).await?;
    Ok(Json(task))
}
