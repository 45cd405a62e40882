use crate::tasks::{Task, TaskError, TaskRepository};

/// Service layer for task business logic
///
/// `owner_id` always comes from a verified token, never from the request body.
#[derive(Clone)]
pub struct TaskService {
    repository: TaskRepository,
}

impl TaskService {
    /// Create a new TaskService
    pub fn new(repository: TaskRepository) -> Self {
        Self { repository }
    }

    /// All tasks owned by `owner_id`, in insertion order
    pub async fn list(&self, owner_id: i64) -> Result<Vec<Task>, TaskError> {
        let tasks = self.repository.find_by_owner(owner_id).await?;
        tracing::debug!("Retrieved {} tasks for user {}", tasks.len(), owner_id);
        Ok(tasks)
    }

    /// Create a task for `owner_id`
    pub async fn create(&self, owner_id: i64, title: &str) -> Result<Task, TaskError> {
        if title.is_empty() {
            return Err(TaskError::MissingTitle);
        }

        let task = self.repository.create(owner_id, title).await?;
        tracing::info!("Created task {} for user {}", task.id, owner_id);
        Ok(task)
    }

    /// Mark a task done or not done
    ///
    /// Succeeds even when nothing matched (unknown id or someone else's task);
    /// the number of affected rows is returned for callers that care.
    pub async fn set_completed(
        &self,
        owner_id: i64,
        task_id: i64,
        completed: bool,
    ) -> Result<u64, TaskError> {
        let affected = self
            .repository
            .set_completed(owner_id, task_id, completed)
            .await?;

        if affected == 0 {
            tracing::debug!("Update of task {} by user {} matched no rows", task_id, owner_id);
        } else {
            tracing::info!("Task {} marked completed={} by user {}", task_id, completed, owner_id);
        }
        Ok(affected)
    }

    /// Delete a task, with the same no-match policy as `set_completed`
    pub async fn delete(&self, owner_id: i64, task_id: i64) -> Result<u64, TaskError> {
        let affected = self.repository.delete(owner_id, task_id).await?;

        if affected == 0 {
            tracing::debug!("Delete of task {} by user {} matched no rows", task_id, owner_id);
        } else {
            tracing::info!("Task {} deleted by user {}", task_id, owner_id);
        }
        Ok(affected)
    }
}
