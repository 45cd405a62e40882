use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Domain model representing a task in the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Task {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

/// Request DTO for creating a task
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing title"))]
    #[schema(example = "buy milk")]
    pub title: String,
}

/// Request DTO for marking a task done or not done
///
/// `completed` is read loosely: booleans as-is, numbers as non-zero, strings
/// as non-empty, and null or absent as false.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "truthy")]
    #[schema(example = true)]
    pub completed: bool,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// A task as listed by GET /api/tasks
///
/// `completed` goes over the wire as 0/1.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub owner_id: i64,
    #[schema(example = "buy milk")]
    pub title: String,
    #[schema(example = 0)]
    pub completed: u8,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            owner_id: task.owner_id,
            title: task.title,
            completed: u8::from(task.completed),
        }
    }
}

/// Body returned by POST /api/tasks
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedTaskResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "buy milk")]
    pub title: String,
    #[schema(example = 0)]
    pub completed: u8,
}

impl From<Task> for CreatedTaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            completed: u8::from(task.completed),
        }
    }
}
