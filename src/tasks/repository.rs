use sqlx::SqlitePool;

use crate::tasks::{Task, TaskError};

/// Repository for database operations on tasks
///
/// Every statement filters on `owner_id`; there is no way to reach a task
/// without knowing who owns it.
#[derive(Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    /// Create a new TaskRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All tasks of one owner, oldest first
    pub async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Task>, TaskError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, owner_id, title, completed
            FROM tasks
            WHERE owner_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Insert a new, not yet completed task
    pub async fn create(&self, owner_id: i64, title: &str) -> Result<Task, TaskError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (owner_id, title)
            VALUES (?, ?)
            RETURNING id, owner_id, title, completed
            "#,
        )
        .bind(owner_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Set the completed flag, returning how many rows changed (0 or 1)
    pub async fn set_completed(
        &self,
        owner_id: i64,
        task_id: i64,
        completed: bool,
    ) -> Result<u64, TaskError> {
        let result = sqlx::query("UPDATE tasks SET completed = ? WHERE id = ? AND owner_id = ?")
            .bind(completed)
            .bind(task_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a task, returning how many rows were removed (0 or 1)
    pub async fn delete(&self, owner_id: i64, task_id: i64) -> Result<u64, TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND owner_id = ?")
            .bind(task_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
