use kanal::AsyncSender;
use wordsaver_core::StoreError;
use wordsaver_lexicon::EnrichReport;
use wordsaver_types::{AppEvent, Notice};

use super::send_notice;
use crate::state::AppState;

/// Fill in meanings, synonyms and antonyms for rows that have no meaning yet
pub async fn handle_enrich(
    state: &AppState,
    notice_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<EnrichReport>> {
    let Some(enricher) = state.enricher.as_ref() else {
        send_notice(
            notice_tx,
            Notice::warning("Translation is disabled, meanings cannot be completed."),
        )
        .await;
        return Ok(None);
    };

    let report = match enricher.enrich_store(&state.store).await {
        Ok(report) => report,
        Err(StoreError::NotFound(path)) => {
            tracing::error!("Words file not found: {}", path.display());
            send_notice(notice_tx, Notice::error("Words file not found!")).await;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "Enrichment: {} updated, {} failed, {} skipped",
        report.updated,
        report.failed,
        report.skipped
    );

    if report.updated > 0 {
        send_notice(notice_tx, Notice::success("Word meanings updated successfully!")).await;
    }

    if report.failed > 0 {
        send_notice(
            notice_tx,
            Notice::warning(format!(
                "{} word(s) could not be looked up.",
                report.failed
            )),
        )
        .await;
    }

    if report.updated == 0 && report.failed == 0 {
        send_notice(notice_tx, Notice::info("All words already have meanings.")).await;
    }

    Ok(Some(report))
}
