use chrono::Duration;
use uuid::Uuid;

use crate::calendar;
use crate::error::CoreError;
use crate::models::{EditScope, TaskEdit};
use crate::store::{TaskChanges, TaskStore};

/// Applies an edit under the given scope.
///
/// `Single` writes exactly the referenced instance. `AllFuture` reads the
/// anchor, computes the day delta to the requested date, then shifts every
/// sibling at or after the anchor's date by that delta — each relative to
/// its own date, so the spacing between instances is preserved. The anchor
/// read and the sub-series fetch complete before any write; the sibling
/// writes themselves are independent and are not rolled back if a later one
/// fails.
pub(crate) async fn apply_edit<S: TaskStore>(
    store: &S,
    task_id: Uuid,
    edit: TaskEdit,
    scope: EditScope,
    recurrence_id: Option<Uuid>,
) -> Result<usize, CoreError> {
    match scope {
        EditScope::Single => {
            let changes = TaskChanges {
                title: edit.title,
                description: edit.description,
                due_at: edit.due_date.map(calendar::normalize_to_noon),
                status: None,
            };
            store.update_by_id(task_id, changes).await?;
            Ok(1)
        }
        EditScope::AllFuture => {
            let recurrence_id = recurrence_id.ok_or_else(|| {
                CoreError::InvalidInput("a series edit needs the recurrence id".to_string())
            })?;

            let anchor = store
                .find_by_id(task_id)
                .await?
                .ok_or_else(|| CoreError::NotFound(task_id.to_string()))?;
            match anchor.recurrence_id {
                Some(rid) if rid == recurrence_id => {}
                Some(_) => {
                    return Err(CoreError::InvalidInput(
                        "recurrence id does not match the referenced task".to_string(),
                    ))
                }
                None => {
                    return Err(CoreError::InvalidInput(
                        "task is not part of a recurring series".to_string(),
                    ))
                }
            }

            let delta = edit
                .due_date
                .map(|new_date| calendar::day_delta(anchor.due_at.date_naive(), new_date))
                .unwrap_or(0);

            let siblings = store
                .find_by_recurrence(recurrence_id, Some(anchor.due_at))
                .await?;
            if siblings.is_empty() {
                // The series ended before the anchor's date; nothing to do.
                return Ok(0);
            }

            let count = siblings.len();
            for sibling in siblings {
                let shifted = (delta != 0).then(|| {
                    calendar::normalize_to_noon(
                        sibling.due_at.date_naive() + Duration::days(delta),
                    )
                });
                let changes = TaskChanges {
                    title: edit.title.clone(),
                    description: edit.description.clone(),
                    due_at: shifted,
                    status: None,
                };
                store.update_by_id(sibling.id, changes).await?;
            }

            tracing::debug!(%recurrence_id, count, delta, "shifted future sub-series");
            Ok(count)
        }
    }
}
