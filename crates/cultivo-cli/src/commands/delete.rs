use anyhow::Result;
use dialoguer::Confirm;

use cultivo_core::models::DeleteScope;
use cultivo_core::scheduler::TaskScheduler;
use cultivo_core::store::TaskStore;

use crate::cli::DeleteCommand;
use crate::util::resolve_task_id;

pub async fn delete_tasks<S: TaskStore>(
    scheduler: &TaskScheduler<S>,
    command: DeleteCommand,
) -> Result<()> {
    let mut ids = Vec::with_capacity(command.ids.len());
    for raw in &command.ids {
        ids.push(resolve_task_id(scheduler.store(), raw).await?);
    }

    if let Some(scope) = command.series {
        let anchor_id = match ids.as_slice() {
            [only] => *only,
            _ => return Err(anyhow::anyhow!("--series takes exactly one task ID")),
        };
        let anchor = scheduler
            .store()
            .find_by_id(anchor_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Task not found"))?;
        let recurrence_id = anchor
            .recurrence_id
            .ok_or_else(|| anyhow::anyhow!("Task '{}' is not part of a recurring series", anchor.title))?;

        let prompt = match scope {
            DeleteScope::This => format!(
                "Delete only this occurrence of '{}' ({})?",
                anchor.title,
                anchor.due_at.format("%Y-%m-%d")
            ),
            DeleteScope::All => format!(
                "Delete '{}' and every other task in its series?",
                anchor.title
            ),
        };
        if !confirmed(command.force, &prompt) {
            println!("Deletion cancelled.");
            return Ok(());
        }

        let removed = scheduler
            .delete_series(recurrence_id, anchor_id, scope)
            .await?;
        println!("Deleted {} task(s) from the series.", removed);
        return Ok(());
    }

    if let [only] = ids.as_slice() {
        let task = scheduler
            .store()
            .find_by_id(*only)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Task not found"))?;
        let prompt = format!("Are you sure you want to delete task '{}'?", task.title);
        if !confirmed(command.force, &prompt) {
            println!("Deletion cancelled.");
            return Ok(());
        }
        scheduler.delete_task(*only).await?;
        println!("Deleted task.");
        return Ok(());
    }

    let prompt = format!("Are you sure you want to delete {} tasks?", ids.len());
    if !confirmed(command.force, &prompt) {
        println!("Deletion cancelled.");
        return Ok(());
    }
    let removed = scheduler.delete_many(&ids).await?;
    println!("Deleted {} task(s).", removed);
    Ok(())
}

fn confirmed(force: bool, prompt: &str) -> bool {
    if force {
        return true;
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}
