//! Command-line driver for the todo list client.
//!
//! Usage:
//!
//! ```text
//! todolist [list | add <description> | toggle <id> | delete <id>]
//! ```
//!
//! The driver restores the list from the durable store, dispatches one event
//! against the remote API configured through `TODOLIST_*` environment
//! variables, and writes the rendered page fragment to stdout. An unusable
//! store directory does not stop the driver: the event still runs and the
//! page carries the storage warning. Set `RUST_LOG` to see synchronization
//! diagnostics.

use camino::Utf8Path;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use todolist::config::{ClientConfig, ConfigError};
use todolist::task::{
    adapters::{
        fs::DirectoryKeyValueStore,
        http::HttpTaskApi,
        template::{TemplateTaskView, TemplateViewError},
    },
    domain::{FallbackIdScheme, TaskDomainError, TaskId},
    ports::TaskApiError,
    services::{TaskListController, TaskListError, TaskPersistence, UiEvent, dispatch},
};

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: todolist [list | add <description> | toggle <id> | delete <id>]")]
    Usage,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    #[error(transparent)]
    Api(#[from] TaskApiError),
    #[error(transparent)]
    Template(#[from] TemplateViewError),
    #[error(transparent)]
    TaskList(#[from] TaskListError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn parse_event(args: &[String]) -> Result<UiEvent, CliError> {
    match args {
        [] => Ok(UiEvent::Startup),
        [command] if command == "list" => Ok(UiEvent::Startup),
        [command, rest @ ..] if command == "add" && !rest.is_empty() => Ok(UiEvent::Submit {
            description: rest.join(" "),
        }),
        [command, id] if command == "toggle" => Ok(UiEvent::Toggle {
            id: TaskId::new(id.as_str())?,
        }),
        [command, id] if command == "delete" => Ok(UiEvent::Delete {
            id: TaskId::new(id.as_str())?,
        }),
        _ => Err(CliError::Usage),
    }
}

async fn run(args: &[String]) -> Result<(), CliError> {
    let event = parse_event(args)?;
    let config = ClientConfig::from_env()?;

    let api = Arc::new(HttpTaskApi::new(
        &config.api_base_url,
        config.request_timeout(),
    )?);
    let store = Arc::new(DirectoryKeyValueStore::open_or_unavailable(
        Utf8Path::new(&config.store_dir),
    ));
    let view = Arc::new(TemplateTaskView::new()?);
    let persistence = TaskPersistence::new(store, config.storage_key.clone());
    let mut controller =
        TaskListController::new(api, persistence, Arc::clone(&view), Arc::new(DefaultClock))
            .with_fallback_scheme(FallbackIdScheme::new(config.fallback_id_prefix.as_str())?);

    dispatch(&mut controller, &UiEvent::Startup).await?;
    if event != UiEvent::Startup {
        // Rejections are already in the view's notification slot.
        if let Err(err) = dispatch(&mut controller, &event).await {
            log::info!("event rejected: {err}");
        }
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", view.page())?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "todolist: {err}").ok();
            ExitCode::FAILURE
        }
    }
}
