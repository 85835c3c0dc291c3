use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use wordsaver_types::{AppEvent, HotkeyAction};

mod cli;
mod controller;
mod events;
mod io;
mod list;
mod notify;
mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    wordsaver_io::logging::init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let state = Arc::new(AppState::new(config));

    match cli.command.unwrap_or_default() {
        Command::Listen => run(state).await,
        Command::Capture => notify::run_once(state, AppEvent::Hotkey(HotkeyAction::Save)).await,
        Command::Enrich => notify::run_once(state, AppEvent::Enrich).await,
        Command::List => {
            println!("{}", list::render(&state.store));
            Ok(())
        }
    }
}

/// Hotkey listener until Ctrl+C or a task exits
async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    if state.store.initialize()? {
        tracing::info!("Initialized {}", state.store.path().display());
    }

    {
        let config = state.config.read().await;
        tracing::info!(
            "📌 The program is running... Copy any word and press '{}' to save and translate it.",
            config.hotkeys.save_and_translate
        );
        tracing::info!(
            "'{}' saves only, '{}' fills in missing meanings.",
            config.hotkeys.save,
            config.hotkeys.auto_complete
        );
        tracing::info!("🛑 Press 'Ctrl+C' to exit.");
    }

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks().await;

    let outcome = tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        result = tasks.join_next() => task_outcome(result),
    };

    controller.shutdown();
    tasks.abort_all();
    outcome
}

/// A listener task ending on its own is a failure
fn task_outcome(
    result: Option<Result<anyhow::Result<()>, tokio::task::JoinError>>,
) -> anyhow::Result<()> {
    match result {
        Some(Ok(Ok(()))) => anyhow::bail!("A listener task exited unexpectedly"),
        Some(Ok(Err(e))) => {
            tracing::error!("task failed: {:#}", e);
            Err(e)
        }
        Some(Err(e)) => Err(anyhow::Error::new(e).context("A listener task panicked")),
        None => anyhow::bail!("No listener tasks running"),
    }
}
