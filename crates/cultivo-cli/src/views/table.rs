use chrono::Utc;
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use cultivo_core::models::{TaskInstance, TaskStatus};

pub fn display_tasks(tasks: &[TaskInstance]) {
    if tasks.is_empty() {
        println!("No pending tasks.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Task", "Kind", "Due", "Target", "Series"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id.to_string()[..8]));

        let mut display_name = String::new();
        if task.is_recurring() {
            display_name.push('↻'); // Recurring symbol
            display_name.push(' ');
        }
        display_name.push_str(&task.title);

        let mut name_cell = Cell::new(display_name);
        if task.status == TaskStatus::Completed {
            name_cell = name_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        }
        row.add_cell(name_cell);

        row.add_cell(Cell::new(&task.kind));

        let now = Utc::now();
        let due_text = task.due_at.humanize();
        let due_cell = if task.status == TaskStatus::Pending {
            if task.due_at < now && task.due_at.date_naive() != now.date_naive() {
                Cell::new(due_text).fg(Color::Red) // Overdue
            } else if task.due_at.date_naive() == now.date_naive() {
                Cell::new(due_text).fg(Color::Yellow) // Due today
            } else {
                Cell::new(due_text)
            }
        } else {
            Cell::new(due_text)
        };
        row.add_cell(due_cell);

        let target = task
            .target()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        row.add_cell(Cell::new(target));

        row.add_cell(Cell::new(
            task.recurrence_id
                .map(|id| id.to_string()[..8].to_string())
                .unwrap_or_else(|| "-".to_string()),
        ));

        table.add_row(row);
    }

    println!("{table}");
}
