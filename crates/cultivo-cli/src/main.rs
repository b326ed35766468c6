use clap::Parser;
use owo_colors::{OwoColorize, Style};

use cultivo_core::db;
use cultivo_core::error::CoreError;
use cultivo_core::scheduler::TaskScheduler;
use cultivo_core::store::SqliteTaskStore;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::new().unwrap_or_default();

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let scheduler = TaskScheduler::new(SqliteTaskStore::new(db_pool));

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&scheduler, command).await,
        cli::Commands::List(command) => {
            commands::list::list_tasks(&scheduler, command, &config).await
        }
        cli::Commands::Edit(command) => commands::edit::edit_task(&scheduler, command).await,
        cli::Commands::Done(command) => commands::done::toggle_done(&scheduler, command).await,
        cli::Commands::Delete(command) => {
            commands::delete::delete_tasks(&scheduler, command).await
        }
    };

    if let Err(e) = result {
        handle_error(e);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(tasks) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, title) in tasks {
                    eprintln!("  {} ({})", id.yellow(), title);
                }
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
    std::process::exit(1);
}
