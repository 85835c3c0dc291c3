use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordsaver_hotkey::HotkeyManager;
use wordsaver_types::AppEvent;

use crate::state::AppState;

/// Polls the global hotkeys on a blocking thread and forwards presses to the event loop
pub async fn watcher_io(
    state: Arc<AppState>,
    delta_time: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hotkeys = {
        let config = state.config.read().await;
        config.hotkeys.clone()
    };

    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let hotkey_manager = HotkeyManager::new(&hotkeys)?;

        tracing::info!(
            "Hotkeys registered ({}, {}, {})",
            hotkeys.save_and_translate,
            hotkeys.save,
            hotkeys.auto_complete
        );

        let tx = event_tx.as_sync();

        while !cancel.is_cancelled() {
            if let Some(action) = hotkey_manager.poll() {
                tracing::info!("Hotkey pressed: {}", action);
                tx.send(AppEvent::Hotkey(action))
                    .context("Event loop is gone")?;
            }

            // Sleep briefly to avoid busy loop
            std::thread::sleep(delta_time);
        }

        tracing::info!("Hotkey listener stopping");
        Ok(())
    })
    .await
    .context("Hotkey listener panicked")?
}
