use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordsaver_io::notify::DesktopNotifier;
use wordsaver_types::AppEvent;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::notify::notifier_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub to_notifier: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            to_app: kanal::bounded_async(64),       // hotkey presses
            to_notifier: kanal::bounded_async(64),  // user notices
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let (delta_time, notification) = {
            let config = self.state.config.read().await;
            (
                Duration::from_millis(config.delta_time),
                config.notification.clone(),
            )
        };

        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.to_app.1.clone(),
            self.channels.to_notifier.0.clone(),
        ));

        // Notifier
        tasks.spawn(notifier_loop(
            self.channels.to_notifier.1.clone(),
            DesktopNotifier::new(notification),
        ));

        // Hotkey watcher
        tasks.spawn(watcher_io(
            self.state.clone(),
            delta_time,
            self.cancel_token.child_token(),
            self.channels.to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
        let _ = self.channels.to_app.0.try_send(AppEvent::Shutdown);
        let _ = self.channels.to_notifier.0.try_send(AppEvent::Shutdown);
    }
}
