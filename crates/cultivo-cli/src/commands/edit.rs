use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;

use cultivo_core::models::{EditScope, TaskEdit};
use cultivo_core::scheduler::TaskScheduler;
use cultivo_core::store::TaskStore;

use crate::cli::EditCommand;
use crate::parser::parse_date;
use crate::util::resolve_task_id;

pub async fn edit_task<S: TaskStore>(
    scheduler: &TaskScheduler<S>,
    command: EditCommand,
) -> Result<()> {
    let task_id = resolve_task_id(scheduler.store(), &command.id).await?;

    let task = scheduler
        .store()
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task not found"))?;

    // An explicit --scope always reaches the engine, which rejects a series
    // scope on a task that has no series.
    let scope = match (command.scope, task.recurrence_id.is_some()) {
        (Some(scope), _) => scope,
        (None, false) => EditScope::Single,
        (None, true) => {
            // Interactive scope selection
            let scope_options = vec![
                format!("This task only ({})", task.due_at.format("%Y-%m-%d")),
                "This and all future tasks in the series".to_string(),
            ];

            println!("{}", "This task is part of a recurring series.".yellow());
            let selection = Select::new()
                .with_prompt("How would you like to apply your changes?")
                .items(&scope_options)
                .default(0)
                .interact()?;

            match selection {
                0 => EditScope::Single,
                1 => EditScope::AllFuture,
                _ => unreachable!(),
            }
        }
    };

    let description = if command.description_clear {
        Some(None)
    } else {
        command.description.map(Some)
    };

    let edit = TaskEdit {
        title: command.title,
        description,
        due_date: command.date.as_deref().map(parse_date).transpose()?,
    };

    if edit.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    let updated = scheduler
        .update_task(task_id, edit, scope, task.recurrence_id)
        .await?;

    match scope {
        EditScope::Single => println!("Updated task with ID: {}", task_id),
        EditScope::AllFuture if updated == 0 => {
            println!("The series had no tasks at or after this one; nothing changed.")
        }
        EditScope::AllFuture => println!("Updated {} task(s) in the series", updated),
    }

    Ok(())
}
