use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{TaskInstance, TaskStatus};
use crate::store::{TaskChanges, TaskStore};

/// SQLite implementation of the task store.
pub struct SqliteTaskStore {
    pool: DbPool,
}

impl SqliteTaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn create_batch(&self, instances: &[TaskInstance]) -> Result<(), CoreError> {
        if instances.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for instance in instances {
            sqlx::query(
                r#"INSERT INTO tasks (id, title, description, kind, status, due_at, plant_id, space_id, recurrence_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"#,
            )
            .bind(instance.id)
            .bind(&instance.title)
            .bind(&instance.description)
            .bind(&instance.kind)
            .bind(&instance.status)
            .bind(instance.due_at)
            .bind(instance.plant_id)
            .bind(instance.space_id)
            .bind(instance.recurrence_id)
            .bind(instance.created_at)
            .bind(instance.updated_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(count = instances.len(), "persisted task batch");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskInstance>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn find_by_recurrence(
        &self,
        recurrence_id: Uuid,
        due_floor: Option<DateTime<Utc>>,
    ) -> Result<Vec<TaskInstance>, CoreError> {
        let instances = match due_floor {
            Some(floor) => {
                sqlx::query_as(
                    "SELECT * FROM tasks WHERE recurrence_id = $1 AND due_at >= $2 ORDER BY due_at",
                )
                .bind(recurrence_id)
                .bind(floor)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM tasks WHERE recurrence_id = $1 ORDER BY due_at")
                    .bind(recurrence_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(instances)
    }

    async fn find_by_short_id_prefix(&self, prefix: &str) -> Result<Vec<TaskInstance>, CoreError> {
        // Ids are stored as 16-byte blobs; match the user's hyphenless hex
        // prefix against hex(id). LIKE is case-insensitive over ASCII.
        let mut pattern = prefix.replace('-', "");
        pattern.push('%');

        let tasks: Vec<TaskInstance> = sqlx::query_as("SELECT * FROM tasks WHERE hex(id) LIKE ?")
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn find_pending(&self, kind: Option<&str>) -> Result<Vec<TaskInstance>, CoreError> {
        let instances = match kind {
            Some(kind) => {
                sqlx::query_as(
                    "SELECT * FROM tasks WHERE status = $1 AND kind = $2 ORDER BY due_at",
                )
                .bind(TaskStatus::Pending)
                .bind(kind)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM tasks WHERE status = $1 ORDER BY due_at")
                    .bind(TaskStatus::Pending)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(instances)
    }

    async fn update_by_id(&self, id: Uuid, changes: TaskChanges) -> Result<(), CoreError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tasks SET ");
        let mut updated = false;

        if let Some(title) = &changes.title {
            qb.push("title = ");
            qb.push_bind(title.clone());
            updated = true;
        }

        if let Some(description) = &changes.description {
            if updated {
                qb.push(", ");
            }
            qb.push("description = ");
            qb.push_bind(description.clone());
            updated = true;
        }

        if let Some(due_at) = changes.due_at {
            if updated {
                qb.push(", ");
            }
            qb.push("due_at = ");
            qb.push_bind(due_at);
            updated = true;
        }

        if let Some(status) = &changes.status {
            if updated {
                qb.push(", ");
            }
            qb.push("status = ");
            qb.push_bind(status.clone());
        }

        qb.push(", updated_at = ");
        qb.push_bind(Utc::now());
        qb.push(" WHERE id = ");
        qb.push_bind(id);

        let result = qb.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<u64, CoreError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM tasks WHERE id IN (");
        let mut separated = qb.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = qb.build().execute(&self.pool).await?;
        tracing::debug!(requested = ids.len(), removed = result.rows_affected(), "deleted tasks");
        Ok(result.rows_affected())
    }
}
