use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{TaskInstance, TaskStatus};

mod sqlite;

pub use sqlite::SqliteTaskStore;

/// Partial update handed to [`TaskStore::update_by_id`]. Fields left `None`
/// keep the stored value; `description` uses the nested-Option idiom, where
/// `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_at: Option<DateTime<Utc>>,
    /// Only ever set by collaborators toggling completion; scheduler paths
    /// leave it `None`.
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_at.is_none()
            && self.status.is_none()
    }
}

/// Durable persistence of task instances. Every method is a suspension
/// point; the scheduler's date arithmetic never is.
#[async_trait]
pub trait TaskStore {
    /// Persists a generated batch as one unit: either every instance is
    /// stored or none is.
    async fn create_batch(&self, instances: &[TaskInstance]) -> Result<(), CoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskInstance>, CoreError>;

    /// Instances sharing `recurrence_id`, ascending by due date, optionally
    /// restricted to `due_at >= due_floor` (the future sub-series).
    async fn find_by_recurrence(
        &self,
        recurrence_id: Uuid,
        due_floor: Option<DateTime<Utc>>,
    ) -> Result<Vec<TaskInstance>, CoreError>;

    async fn find_by_short_id_prefix(&self, prefix: &str) -> Result<Vec<TaskInstance>, CoreError>;

    /// Pending instances, ascending by due date, optionally filtered by kind.
    async fn find_pending(&self, kind: Option<&str>) -> Result<Vec<TaskInstance>, CoreError>;

    async fn update_by_id(&self, id: Uuid, changes: TaskChanges) -> Result<(), CoreError>;

    /// Removes the given instances in one statement and reports how many
    /// rows existed.
    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<u64, CoreError>;
}
