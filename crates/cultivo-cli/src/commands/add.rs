use anyhow::Result;
use chrono::Local;
use cultivo_core::models::{Frequency, NewTaskRequest, Recurrence, TargetRef};
use cultivo_core::scheduler::TaskScheduler;
use cultivo_core::store::TaskStore;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;
use crate::parser::parse_date;

pub async fn add_task<S: TaskStore>(
    scheduler: &TaskScheduler<S>,
    command: AddCommand,
) -> Result<()> {
    let date = match &command.date {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let targets: Vec<TargetRef> = command
        .plant
        .into_iter()
        .map(TargetRef::Plant)
        .chain(command.space.into_iter().map(TargetRef::Space))
        .collect();

    let recurrence = command
        .every
        .as_deref()
        .map(|tag| -> Result<Recurrence> {
            Ok(Recurrence {
                frequency: Frequency::from_tag(tag),
                until: command.until.as_deref().map(parse_date).transpose()?,
            })
        })
        .transpose()?;

    let request = NewTaskRequest {
        kind: command.kind,
        title: command.title,
        description: command.description,
        date,
        targets,
        recurrence,
    };

    let instances = scheduler.create_task(request).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    let first = &instances[0];

    if first.is_recurring() {
        println!(
            "{} Created recurring task: {}",
            "✓".style(success_style),
            first.title.bright_white().bold()
        );
        println!(
            "  {} {} instances, {} through {}",
            "→".style(info_style),
            instances.len(),
            first.due_at.format("%Y-%m-%d").to_string().cyan(),
            instances
                .last()
                .unwrap()
                .due_at
                .format("%Y-%m-%d")
                .to_string()
                .cyan()
        );
        println!(
            "  {} Series ID: {}",
            "→".style(info_style),
            first.recurrence_id.unwrap().to_string().yellow()
        );
    } else {
        println!(
            "{} Created task: {}",
            "✓".style(success_style),
            first.title.bright_white().bold()
        );
        println!(
            "  {} Task ID: {}",
            "→".style(info_style),
            first.id.to_string().yellow()
        );
        println!(
            "  {} Due: {}",
            "→".style(info_style),
            first.due_at.format("%Y-%m-%d").to_string().cyan()
        );
        if instances.len() > 1 {
            println!(
                "  {} {} targets, one task each",
                "→".style(info_style),
                instances.len()
            );
        }
    }

    Ok(())
}
