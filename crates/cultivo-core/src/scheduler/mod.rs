//! The scheduling engine: series generation, scoped mutation, termination.
//!
//! A series is never a stored aggregate; it is the derived set of instances
//! sharing one `recurrence_id`, recomputed by query whenever an operation
//! needs it.

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{DeleteScope, EditScope, NewTaskRequest, TaskEdit, TaskInstance};
use crate::store::TaskStore;

pub mod generator;
mod mutator;
mod terminator;

/// Facade over the store gateway exposing the public scheduling operations.
/// Invoked synchronously per user action; there is no background execution.
pub struct TaskScheduler<S> {
    store: S,
}

impl<S: TaskStore> TaskScheduler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for collaborators that read tasks or toggle
    /// completion outside the scheduler's responsibility.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Expands a task request into dated instances and persists them as one
    /// batch. A failed batch means nothing was created.
    pub async fn create_task(
        &self,
        request: NewTaskRequest,
    ) -> Result<Vec<TaskInstance>, CoreError> {
        let instances = generator::generate(&request)?;
        self.store.create_batch(&instances).await?;
        tracing::info!(
            count = instances.len(),
            recurring = instances.first().is_some_and(|i| i.is_recurring()),
            "created task instances"
        );
        Ok(instances)
    }

    /// Applies an edit to one instance or to the future sub-series anchored
    /// at it. Returns how many instances were written.
    pub async fn update_task(
        &self,
        task_id: Uuid,
        edit: TaskEdit,
        scope: EditScope,
        recurrence_id: Option<Uuid>,
    ) -> Result<usize, CoreError> {
        mutator::apply_edit(&self.store, task_id, edit, scope, recurrence_id).await
    }

    /// Removes exactly one instance.
    pub async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        terminator::delete_single(&self.store, id).await
    }

    /// Removes the anchor instance or its whole series. Returns how many
    /// instances were removed.
    pub async fn delete_series(
        &self,
        recurrence_id: Uuid,
        anchor_id: Uuid,
        scope: DeleteScope,
    ) -> Result<u64, CoreError> {
        terminator::delete_series(&self.store, recurrence_id, anchor_id, scope).await
    }

    /// Removes an arbitrary id set in one batch (multi-select deletion).
    pub async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, CoreError> {
        terminator::delete_many(&self.store, ids).await
    }
}
