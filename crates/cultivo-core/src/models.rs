use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Task kind used when the caller supplies a free-text title instead of one
/// of the built-in classifications. The generator refuses a request of this
/// kind without an explicit title.
pub const GENERIC_KIND: &str = "other";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The two-state toggle driven by collaborators outside the scheduler.
    pub fn toggled(&self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task status: {0}")]
pub struct ParseTaskStatusError(String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ParseTaskStatusError(s.to_string())),
        }
    }
}

/// Recurrence step for a task series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Every2Days,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    /// Lenient tag parsing. Unrecognized tags fall back to `Daily` so that a
    /// request carrying a stale or misspelled tag still generates a series
    /// instead of failing the whole creation.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "2days" | "every2days" => Frequency::Every2Days,
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Daily,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Every2Days => "every2days",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Reference to the plant or growing space a task acts on. The task
/// references its target, it does not own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRef {
    Plant(Uuid),
    Space(Uuid),
}

impl TargetRef {
    pub fn plant_id(&self) -> Option<Uuid> {
        match self {
            TargetRef::Plant(id) => Some(*id),
            TargetRef::Space(_) => None,
        }
    }

    pub fn space_id(&self) -> Option<Uuid> {
        match self {
            TargetRef::Plant(_) => None,
            TargetRef::Space(id) => Some(*id),
        }
    }
}

impl std::fmt::Display for TargetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetRef::Plant(id) => write!(f, "plant {}", &id.to_string()[..8]),
            TargetRef::Space(id) => write!(f, "space {}", &id.to_string()[..8]),
        }
    }
}

/// One concrete, dated unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskInstance {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Task-type classifier (irrigation, pruning, ...). Opaque to the
    /// scheduler except for [`GENERIC_KIND`].
    pub kind: String,
    pub status: TaskStatus,
    /// Noon-UTC instant for the task's calendar date; see
    /// [`crate::calendar::normalize_to_noon`].
    pub due_at: DateTime<Utc>,
    pub plant_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    /// Shared across every instance generated from one recurring request.
    /// `None` for one-off tasks, which series-scope operations never touch.
    pub recurrence_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskInstance {
    pub fn target(&self) -> Option<TargetRef> {
        self.plant_id
            .map(TargetRef::Plant)
            .or(self.space_id.map(TargetRef::Space))
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence_id.is_some()
    }
}

/// A user-authored task request, recurring or one-off.
#[derive(Debug, Clone, Default)]
pub struct NewTaskRequest {
    pub kind: String,
    /// Explicit title; required when `kind` is [`GENERIC_KIND`], otherwise
    /// derived from the kind when absent.
    pub title: Option<String>,
    pub description: Option<String>,
    /// First (or only) due date of the request.
    pub date: NaiveDate,
    pub targets: Vec<TargetRef>,
    pub recurrence: Option<Recurrence>,
}

#[derive(Debug, Clone, Copy)]
pub struct Recurrence {
    pub frequency: Frequency,
    /// Last date of the series, inclusive. Absent or earlier than the start
    /// date degrades the request to a one-off.
    pub until: Option<NaiveDate>,
}

/// A partial edit; fields left `None` keep the stored value. `description`
/// uses the nested-Option idiom: `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }
}

/// Scope for edits on tasks that belong to a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    /// Affect only the referenced instance.
    Single,
    /// Shift the referenced instance and every later sibling by the same
    /// day delta, preserving relative spacing.
    AllFuture,
}

impl std::fmt::Display for EditScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditScope::Single => write!(f, "single"),
            EditScope::AllFuture => write!(f, "future"),
        }
    }
}

impl FromStr for EditScope {
    type Err = ParseEditScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "this" => Ok(EditScope::Single),
            "future" | "all_future" | "all-future" => Ok(EditScope::AllFuture),
            _ => Err(ParseEditScopeError(s.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid edit scope: {0}")]
pub struct ParseEditScopeError(String);

/// Scope for deleting from a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    /// Remove only the referenced instance; siblings keep their membership.
    This,
    /// Remove every instance sharing the recurrence id, past and future.
    All,
}

impl std::fmt::Display for DeleteScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteScope::This => write!(f, "this"),
            DeleteScope::All => write!(f, "all"),
        }
    }
}

impl FromStr for DeleteScope {
    type Err = ParseDeleteScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "this" | "single" => Ok(DeleteScope::This),
            "all" | "series" => Ok(DeleteScope::All),
            _ => Err(ParseDeleteScopeError(s.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid delete scope: {0}")]
pub struct ParseDeleteScopeError(String);
