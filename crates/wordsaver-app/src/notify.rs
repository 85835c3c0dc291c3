use std::sync::Arc;

use kanal::AsyncReceiver;
use wordsaver_io::notify::DesktopNotifier;
use wordsaver_types::{AppEvent, Notice};

use crate::events::{handle_events, send_notice};
use crate::state::AppState;

/// Shows every notice it receives until `Shutdown` or the channel closes
pub async fn notifier_loop(
    rx: AsyncReceiver<AppEvent>,
    notifier: DesktopNotifier,
) -> anyhow::Result<()> {
    while let Ok(event) = rx.recv().await {
        match event {
            AppEvent::Notify(notice) => {
                let notifier = notifier.clone();
                // desktop notification backends block
                tokio::task::spawn_blocking(move || notifier.notify(&notice)).await?;
            }
            AppEvent::Shutdown => break,
            _ => {}
        }
    }

    Ok(())
}

/// Handle a single event outside the listener (CLI one-shot commands)
pub async fn run_once(state: Arc<AppState>, event: AppEvent) -> anyhow::Result<()> {
    let notification = {
        let config = state.config.read().await;
        config.notification.clone()
    };

    let (tx, rx) = kanal::bounded_async(16);
    let notifier = tokio::spawn(notifier_loop(rx, DesktopNotifier::new(notification)));

    let result = handle_events(&state, &tx, event).await;
    if let Err(e) = &result {
        send_notice(&tx, Notice::error(format!("Error: {e}"))).await;
    }

    tx.send(AppEvent::Shutdown).await?;
    notifier.await??;
    result
}
