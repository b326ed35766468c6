//! # Cultivo Core Library
//!
//! The scheduling engine of the cultivo grow tracker: recurring task series
//! generation, scoped series mutation, and series termination over a
//! SQLite-backed task store.
//!
//! ## Features
//!
//! - **Series Generation**: one task request fans out into dated instances
//!   (one per target per occurrence) sharing a single recurrence identity
//! - **Scoped Mutation**: edit one instance, or shift a whole future
//!   sub-series by a proportional day delta
//! - **Drift-Free Dates**: every due date is a noon-UTC instant, so
//!   date-only round trips never cross a day boundary
//! - **Derived Series**: a series is the set of rows sharing a recurrence
//!   id, recomputed by query, never a stored aggregate
//! - **Type Safety**: compile-time checked models bound through sqlx
//!
//! ## Core Modules
//!
//! - [`calendar`]: pure date arithmetic (advance, inclusive iteration, day
//!   deltas, noon normalization)
//! - [`scheduler`]: the generation/mutation/termination engine
//! - [`store`]: the task-store gateway trait and its SQLite implementation
//! - [`models`]: core data structures and transfer objects
//! - [`db`]: database connection and migration management
//! - [`error`]: error types with context
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use cultivo_core::{
//!     db,
//!     models::{Frequency, NewTaskRequest, Recurrence, TargetRef},
//!     scheduler::TaskScheduler,
//!     store::SqliteTaskStore,
//! };
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cultivo_core::error::CoreError> {
//!     let pool = db::establish_connection("cultivo.db").await?;
//!     let scheduler = TaskScheduler::new(SqliteTaskStore::new(pool));
//!
//!     // Water one plant every week through late January
//!     let request = NewTaskRequest {
//!         kind: "irrigation".to_string(),
//!         date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         targets: vec![TargetRef::Plant(Uuid::now_v7())],
//!         recurrence: Some(Recurrence {
//!             frequency: Frequency::Weekly,
//!             until: NaiveDate::from_ymd_opt(2024, 1, 22),
//!         }),
//!         ..Default::default()
//!     };
//!
//!     let instances = scheduler.create_task(request).await?;
//!     println!("created {} instances", instances.len());
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod db;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
