use anyhow::Context;
use notify_rust::{Notification, Timeout};
use wordsaver_config::notification::NotificationConfig;
use wordsaver_types::{Notice, NoticeLevel};

/// Shows notices as desktop notifications and mirrors them to the log
#[derive(Clone)]
pub struct DesktopNotifier {
    config: NotificationConfig,
}

impl DesktopNotifier {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config }
    }

    pub fn notify(&self, notice: &Notice) {
        log_notice(notice);

        if !self.config.enabled {
            return;
        }

        if let Err(e) = self.show(notice) {
            tracing::warn!("Desktop notification failed: {:#}", e);
        }
    }

    fn show(&self, notice: &Notice) -> anyhow::Result<()> {
        Notification::new()
            .summary(&self.config.title)
            .body(&notice.display_text())
            .timeout(Timeout::Milliseconds(self.config.timeout_ms))
            .show()
            .map(|_| ())
            .context("Failed to show notification")
    }
}

pub fn log_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", notice.display_text()),
        NoticeLevel::Warning => tracing::warn!("{}", notice.display_text()),
        NoticeLevel::Error => tracing::error!("{}", notice.display_text()),
    }
}
