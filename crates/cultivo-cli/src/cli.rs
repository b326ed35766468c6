use clap::{Parser, Subcommand};
use cultivo_core::models::{DeleteScope, EditScope};
use uuid::Uuid;

/// Recurring task scheduling for the cultivo grow tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a task, optionally repeating on a fixed frequency
    Add(AddCommand),
    /// List pending tasks
    List(ListCommand),
    /// Edit a task or its future sub-series
    Edit(EditCommand),
    /// Toggle a task between pending and completed
    Done(DoneCommand),
    /// Delete tasks, or a recurring series
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// Task kind (irrigation, pruning, feeding, ... or "other")
    pub kind: String,
    /// Explicit title (required when the kind is "other")
    #[clap(short, long)]
    pub title: Option<String>,
    /// Additional notes
    #[clap(short, long)]
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    pub date: Option<String>,
    /// Target plant ids
    #[clap(long, num_args = 1..)]
    pub plant: Vec<Uuid>,
    /// Target space ids
    #[clap(long, num_args = 1..)]
    pub space: Vec<Uuid>,
    /// Repeat frequency (daily, every2days, weekly, biweekly, monthly)
    #[clap(long)]
    pub every: Option<String>,
    /// Last date of the series (YYYY-MM-DD)
    #[clap(long, requires = "every")]
    pub until: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only show tasks of this kind
    #[clap(short, long)]
    pub kind: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit (full or short prefix)
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "description")]
    pub description_clear: bool,

    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// How to apply changes to a recurring task (single|future)
    #[arg(long)]
    pub scope: Option<EditScope>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to toggle
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// Task IDs (full or short prefixes); several IDs delete as one batch
    #[clap(required = true, num_args = 1..)]
    pub ids: Vec<String>,
    /// Series scope for a recurring task (this|all)
    #[clap(long)]
    pub series: Option<DeleteScope>,
    /// Skip the confirmation prompt
    #[clap(short, long)]
    pub force: bool,
}
