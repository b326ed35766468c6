use anyhow::Result;
use owo_colors::{OwoColorize, Style};

use cultivo_core::models::TaskStatus;
use cultivo_core::scheduler::TaskScheduler;
use cultivo_core::store::{TaskChanges, TaskStore};

use crate::cli::DoneCommand;
use crate::util::resolve_task_id;

/// Completion is toggled here, outside the scheduler: series mutations never
/// read or write status.
pub async fn toggle_done<S: TaskStore>(
    scheduler: &TaskScheduler<S>,
    command: DoneCommand,
) -> Result<()> {
    let task_id = resolve_task_id(scheduler.store(), &command.id).await?;

    let task = scheduler
        .store()
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    let next = task.status.toggled();
    scheduler
        .store()
        .update_by_id(
            task_id,
            TaskChanges {
                status: Some(next.clone()),
                ..Default::default()
            },
        )
        .await?;

    let success_style = Style::new().green().bold();
    match next {
        TaskStatus::Completed => println!(
            "{} Completed: {}",
            "✓".style(success_style),
            task.title.bright_white().bold()
        ),
        TaskStatus::Pending => println!(
            "{} Reopened: {}",
            "↺".style(success_style),
            task.title.bright_white().bold()
        ),
    }

    Ok(())
}
