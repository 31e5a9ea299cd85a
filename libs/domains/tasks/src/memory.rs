//! In-memory task repository.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskStatus};
use crate::repository::TaskRepository;

/// Thread-safe in-memory task repository.
///
/// A single mutex guards the vector, so every operation - reads
/// included - is serialized against concurrent writers. Scan order is
/// insertion order, and ids are unique by construction (the service
/// generates them), so a linear search finds at most one match.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<Mutex<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> TaskResult<MutexGuard<'_, Vec<Task>>> {
        self.tasks
            .lock()
            .map_err(|e| TaskError::Internal(format!("task store lock poisoned: {e}")))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add(&self, task: Task) -> TaskResult<Task> {
        let mut tasks = self.lock()?;
        tasks.push(task.clone());
        Ok(task)
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.lock()?;
        Ok(tasks.clone())
    }

    async fn get_by_id(&self, id: &str) -> TaskResult<Option<Task>> {
        let tasks = self.lock()?;
        Ok(tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn update(&self, id: &str, task: Task) -> TaskResult<Option<Task>> {
        let mut tasks = self.lock()?;
        match tasks.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                *stored = task;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    async fn mark_complete(&self, id: &str) -> TaskResult<Option<Task>> {
        let mut tasks = self.lock()?;
        match tasks.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                stored.status = TaskStatus::Completed;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("Description of {title}"),
            status,
        }
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order() {
        let repo = InMemoryTaskRepository::new();
        repo.add(task("1", "First", TaskStatus::Todo)).await.unwrap();
        repo.add(task("2", "Second", TaskStatus::InProgress))
            .await
            .unwrap();
        repo.add(task("3", "Third", TaskStatus::Todo)).await.unwrap();

        let tasks = repo.list().await.unwrap();
        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = InMemoryTaskRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_returns_copy() {
        let repo = InMemoryTaskRepository::new();
        let stored = repo.add(task("1", "First", TaskStatus::Todo)).await.unwrap();

        let found = repo.get_by_id("1").await.unwrap();
        assert_eq!(found, Some(stored));
        assert_eq!(repo.get_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = InMemoryTaskRepository::new();
        repo.add(task("1", "First", TaskStatus::Todo)).await.unwrap();
        repo.add(task("2", "Second", TaskStatus::Todo)).await.unwrap();

        let replacement = task("1", "Rewritten", TaskStatus::InProgress);
        let updated = repo.update("1", replacement.clone()).await.unwrap();
        assert_eq!(updated, Some(replacement));

        // Position preserved, neighbours untouched
        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks[0].title, "Rewritten");
        assert_eq!(tasks[1].title, "Second");
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let repo = InMemoryTaskRepository::new();
        let result = repo
            .update("missing", task("missing", "X", TaskStatus::Todo))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_mark_complete_only_touches_status() {
        let repo = InMemoryTaskRepository::new();
        repo.add(task("1", "First", TaskStatus::Todo)).await.unwrap();

        let completed = repo.mark_complete("1").await.unwrap().unwrap();
        assert_eq!(completed.status, TaskStatus::Completed);
        assert_eq!(completed.title, "First");
        assert_eq!(completed.description, "Description of First");

        // Idempotent on repeat
        let again = repo.mark_complete("1").await.unwrap().unwrap();
        assert_eq!(again.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_mark_complete_missing_id() {
        let repo = InMemoryTaskRepository::new();
        assert_eq!(repo.mark_complete("missing").await.unwrap(), None);
    }
}
