use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::Task;

/// Repository trait for Task storage
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Append a task and return the stored copy
    async fn add(&self, task: Task) -> TaskResult<Task>;

    /// All tasks in insertion order; empty when none exist
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// First task whose id matches, scanning in insertion order
    async fn get_by_id(&self, id: &str) -> TaskResult<Option<Task>>;

    /// Replace the whole record at the matching position; `None` when absent
    async fn update(&self, id: &str, task: Task) -> TaskResult<Option<Task>>;

    /// Force the matching task's status to completed, leaving the other
    /// fields untouched; `None` when absent
    async fn mark_complete(&self, id: &str) -> TaskResult<Option<Task>>;
}
