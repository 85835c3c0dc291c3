use std::sync::Arc;

use wordsaver_core::{StoreError, WordRecord, WordStore, WordTable};
use wordsaver_translator::{TranslateError, Translator};

use crate::datamuse::{LookupError, Relation, RelatedWords};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("related word lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Lookup results for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    pub translation: String,
    /// `None` when related-word lookups are disabled
    pub synonyms: Option<String>,
    pub antonyms: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichReport {
    pub updated: usize,
    pub failed: usize,
    /// Rows that already had a meaning, or had no word to look up
    pub skipped: usize,
}

/// Join lookup results the way they are stored in the file
pub fn join_or_na(words: &[String]) -> String {
    if words.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        words.join(", ")
    }
}

/// Fills Meaning/Synonyms/Antonyms for rows that lack a meaning
pub struct Enricher {
    translator: Arc<dyn Translator>,
    related: Option<Arc<dyn RelatedWords>>,
    from_lang: String,
    to_lang: String,
}

impl Enricher {
    pub fn new(
        translator: Arc<dyn Translator>,
        related: Option<Arc<dyn RelatedWords>>,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            related,
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
        }
    }

    pub async fn word_info(&self, word: &str) -> Result<WordInfo, EnrichError> {
        let translation = self
            .translator
            .translate(word, self.from_lang.clone(), self.to_lang.clone())
            .await?;

        let (synonyms, antonyms) = match &self.related {
            Some(related) => {
                let synonyms = related.related(word, Relation::Synonym).await?;
                let antonyms = related.related(word, Relation::Antonym).await?;
                (Some(join_or_na(&synonyms)), Some(join_or_na(&antonyms)))
            }
            None => (None, None),
        };

        Ok(WordInfo {
            translation: translation.text,
            synonyms,
            antonyms,
        })
    }

    /// Enrich rows in place. Failed rows are left unchanged.
    pub async fn enrich_table(&self, table: &mut WordTable) -> EnrichReport {
        let mut report = EnrichReport::default();

        for row in 0..table.len() {
            let Some(record) = table.get_mut(row) else {
                continue;
            };

            let word = record.word.trim().to_string();
            if !record.needs_meaning() || word.is_empty() {
                report.skipped += 1;
                continue;
            }

            match self.word_info(&word).await {
                Ok(info) => {
                    tracing::info!(
                        "'{}' → '{}' | Synonyms: {} | Antonyms: {}",
                        word,
                        info.translation,
                        info.synonyms.as_deref().unwrap_or("-"),
                        info.antonyms.as_deref().unwrap_or("-"),
                    );
                    apply(record, info);
                    report.updated += 1;
                }
                Err(e) => {
                    tracing::warn!("Lookup for '{}' failed: {}", word, e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Load, enrich and rewrite the file. The file is only written when a row changed.
    pub async fn enrich_store(&self, store: &WordStore) -> Result<EnrichReport, StoreError> {
        let mut table = store.load()?;
        let report = self.enrich_table(&mut table).await;

        if report.updated > 0 {
            store.save(&table)?;
        }

        Ok(report)
    }
}

fn apply(record: &mut WordRecord, info: WordInfo) {
    record.meaning = info.translation;
    if let Some(synonyms) = info.synonyms {
        record.synonyms = synonyms;
    }
    if let Some(antonyms) = info.antonyms {
        record.antonyms = antonyms;
    }
    if record.example.trim().is_empty() {
        record.example = NOT_AVAILABLE.to_string();
    }
}
