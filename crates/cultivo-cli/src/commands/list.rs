use anyhow::Result;

use cultivo_core::scheduler::TaskScheduler;
use cultivo_core::store::TaskStore;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table;

pub async fn list_tasks<S: TaskStore>(
    scheduler: &TaskScheduler<S>,
    command: ListCommand,
    config: &Config,
) -> Result<()> {
    let kind = command.kind.or_else(|| config.default_kind.clone());
    let tasks = scheduler.store().find_pending(kind.as_deref()).await?;
    table::display_tasks(&tasks);
    Ok(())
}
