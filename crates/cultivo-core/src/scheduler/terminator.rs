use uuid::Uuid;

use crate::error::CoreError;
use crate::models::DeleteScope;
use crate::store::TaskStore;

pub(crate) async fn delete_single<S: TaskStore>(store: &S, id: Uuid) -> Result<(), CoreError> {
    let removed = store.delete_by_ids(&[id]).await?;
    if removed == 0 {
        return Err(CoreError::NotFound(id.to_string()));
    }
    Ok(())
}

/// Deletes the anchor instance (`This`) or every instance sharing its
/// recurrence id (`All`). The anchor must exist before anything is removed.
pub(crate) async fn delete_series<S: TaskStore>(
    store: &S,
    recurrence_id: Uuid,
    anchor_id: Uuid,
    scope: DeleteScope,
) -> Result<u64, CoreError> {
    let anchor = store
        .find_by_id(anchor_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(anchor_id.to_string()))?;
    if anchor.recurrence_id != Some(recurrence_id) {
        return Err(CoreError::InvalidInput(
            "recurrence id does not match the referenced task".to_string(),
        ));
    }

    let removed = match scope {
        DeleteScope::This => store.delete_by_ids(&[anchor.id]).await?,
        DeleteScope::All => {
            let members = store.find_by_recurrence(recurrence_id, None).await?;
            let ids: Vec<Uuid> = members.iter().map(|m| m.id).collect();
            store.delete_by_ids(&ids).await?
        }
    };

    tracing::info!(%recurrence_id, removed, %scope, "deleted series instances");
    Ok(removed)
}

pub(crate) async fn delete_many<S: TaskStore>(store: &S, ids: &[Uuid]) -> Result<u64, CoreError> {
    if ids.is_empty() {
        return Err(CoreError::InvalidInput("no tasks selected".to_string()));
    }
    store.delete_by_ids(ids).await
}
