//! Task Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{first_validation_message, Task, TaskPayload, TaskStatus};
use crate::repository::TaskRepository;

/// Task service providing business logic operations
///
/// The service layer validates payloads, assigns identity on creation,
/// and orchestrates repository operations.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a new TaskService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task.
    ///
    /// Assigns a fresh UUID, discarding any id in the payload.
    #[instrument(skip(self, payload), fields(task_title = %payload.title))]
    pub async fn create_task(&self, payload: TaskPayload) -> TaskResult<Task> {
        let status = validated_status(&payload)?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            status,
        };

        self.repository.add(task).await
    }

    /// List all tasks in insertion order
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Get a task by id
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound)
    }

    /// Replace a task wholesale, preserving its id
    #[instrument(skip(self, payload))]
    pub async fn update_task(&self, id: &str, payload: TaskPayload) -> TaskResult<Task> {
        let status = validated_status(&payload)?;

        let task = Task {
            id: id.to_string(),
            title: payload.title,
            description: payload.description,
            status,
        };

        self.repository
            .update(id, task)
            .await?
            .ok_or(TaskError::NotFound)
    }

    /// Mark a task as completed, leaving its other fields untouched
    #[instrument(skip(self))]
    pub async fn complete_task(&self, id: &str) -> TaskResult<Task> {
        self.repository
            .mark_complete(id)
            .await?
            .ok_or(TaskError::NotFound)
    }
}

/// Run the payload through the validator and parse the status string.
///
/// The parse cannot fail after validation succeeds; the error arm keeps
/// the two checks honest without panicking.
fn validated_status(payload: &TaskPayload) -> TaskResult<TaskStatus> {
    payload
        .validate()
        .map_err(|e| TaskError::Validation(first_validation_message(&e)))?;

    payload
        .status
        .parse::<TaskStatus>()
        .map_err(|_| TaskError::Validation("Invalid status".to_string()))
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    fn payload(title: &str, description: &str, status: &str) -> TaskPayload {
        TaskPayload {
            id: String::new(),
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_task_assigns_fresh_id() {
        let mut repo = MockTaskRepository::new();
        repo.expect_add().returning(|task| Ok(task));

        let service = TaskService::new(repo);
        let mut input = payload("T", "D", "todo");
        input.id = "client-supplied".to_string();

        let task = service.create_task(input).await.unwrap();
        assert_ne!(task.id, "client-supplied");
        assert!(Uuid::parse_str(&task.id).is_ok());
        assert_eq!(task.title, "T");
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn test_create_task_rejects_invalid_payload_before_store() {
        let mut repo = MockTaskRepository::new();
        repo.expect_add().never();

        let service = TaskService::new(repo);
        let result = service.create_task(payload("", "D", "todo")).await;
        assert_eq!(
            result,
            Err(TaskError::Validation("Title is required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_task_maps_none_to_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id()
            .withf(|id| id == "missing")
            .returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let result = service.get_task("missing").await;
        assert_eq!(result, Err(TaskError::NotFound));
    }

    #[tokio::test]
    async fn test_update_task_preserves_path_id() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update()
            .withf(|id, task| id == "abc" && task.id == "abc")
            .returning(|_, task| Ok(Some(task)));

        let service = TaskService::new(repo);
        let task = service
            .update_task("abc", payload("New", "New desc", "in progress"))
            .await
            .unwrap();
        assert_eq!(task.id, "abc");
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[tokio::test]
    async fn test_complete_task_missing_id() {
        let mut repo = MockTaskRepository::new();
        repo.expect_mark_complete().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let result = service.complete_task("missing").await;
        assert_eq!(result, Err(TaskError::NotFound));
    }
}
