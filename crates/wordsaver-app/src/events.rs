use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use wordsaver_types::{AppEvent, HotkeyAction, Notice};

use crate::state::AppState;

pub mod capture_word;
pub mod enrich;

use capture_word::{handle_capture, read_clipboard};
use enrich::handle_enrich;

/// App's main loop. Events are handled one at a time, so file access never overlaps.
pub async fn event_loop(
    state: Arc<AppState>,
    app_rx: AsyncReceiver<AppEvent>,
    notice_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = app_rx.recv().await?;

        if matches!(event, AppEvent::Shutdown) {
            tracing::debug!("[EVENT_LOOP] Shutdown");
            return Ok(());
        }

        if let Err(e) = handle_events(&state, &notice_tx, event).await {
            tracing::error!("Event handling failed: {:#}", e);
            send_notice(&notice_tx, Notice::error(format!("Error: {e}"))).await;
        }
    }
}

pub async fn handle_events(
    state: &AppState,
    notice_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Hotkey(action) => {
            tracing::debug!("Handling hotkey action: {}", action);
            match action {
                HotkeyAction::Save => {
                    let text = read_clipboard(state).await?;
                    handle_capture(state, text.as_deref(), notice_tx).await?;
                }
                HotkeyAction::AutoComplete => {
                    handle_enrich(state, notice_tx).await?;
                }
                HotkeyAction::SaveAndTranslate => {
                    let text = read_clipboard(state).await?;
                    handle_capture(state, text.as_deref(), notice_tx).await?;
                    handle_enrich(state, notice_tx).await?;
                }
            }
        }
        AppEvent::Enrich => {
            handle_enrich(state, notice_tx).await?;
        }
        // notices only travel on the notifier channel
        AppEvent::Notify(_) | AppEvent::Shutdown => {}
    }

    Ok(())
}

pub(crate) async fn send_notice(notice_tx: &AsyncSender<AppEvent>, notice: Notice) {
    if let Err(e) = notice_tx.send(AppEvent::Notify(notice)).await {
        tracing::error!("Failed to send notice: {}", e);
    }
}
