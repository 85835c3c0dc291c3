use anyhow::Context;
use kanal::AsyncSender;
use wordsaver_core::AddOutcome;
use wordsaver_core::preprocess::normalize_capture;
use wordsaver_types::{AppEvent, Notice};

use super::send_notice;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved(String),
    Duplicate(String),
    Empty,
}

pub async fn read_clipboard(state: &AppState) -> anyhow::Result<Option<String>> {
    let reader = state.clipboard.clone();
    tokio::task::spawn_blocking(move || reader())
        .await
        .context("Clipboard reader panicked")?
}

/// Store `text` as a new word unless it is blank or already present
pub async fn handle_capture(
    state: &AppState,
    text: Option<&str>,
    notice_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<CaptureOutcome> {
    let word = text.map(normalize_capture).unwrap_or_default();

    if word.is_empty() {
        send_notice(notice_tx, Notice::warning("No word found in the clipboard!")).await;
        return Ok(CaptureOutcome::Empty);
    }

    let outcome = state
        .store
        .add_word(&word)
        .with_context(|| format!("Failed to save '{word}'"))?;

    match outcome {
        AddOutcome::Added => {
            send_notice(
                notice_tx,
                Notice::success(format!("'{word}' has been successfully saved!")),
            )
            .await;
            Ok(CaptureOutcome::Saved(word))
        }
        AddOutcome::Duplicate => {
            send_notice(
                notice_tx,
                Notice::warning(format!("'{word}' already exists in the file!")),
            )
            .await;
            Ok(CaptureOutcome::Duplicate(word))
        }
    }
}
