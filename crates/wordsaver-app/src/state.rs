use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use wordsaver_config::Config;
use wordsaver_core::WordStore;
use wordsaver_lexicon::{DatamuseClient, Enricher, RelatedWords};
use wordsaver_translator::Translator;

/// Source of captured text, the system clipboard outside tests
pub type ClipboardReader = Arc<dyn Fn() -> anyhow::Result<Option<String>> + Send + Sync>;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub store: WordStore,
    /// `None` when translation is disabled or misconfigured
    pub enricher: Option<Enricher>,
    pub clipboard: ClipboardReader,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = WordStore::new(config.store.path.clone());
        let enricher = build_enricher(&config);
        Self::with_parts(config, store, enricher)
    }

    pub fn with_parts(config: Config, store: WordStore, enricher: Option<Enricher>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            enricher,
            clipboard: Arc::new(wordsaver_io::clipboard::read_text),
        }
    }

    #[cfg(test)]
    pub fn with_clipboard(
        mut self,
        reader: impl Fn() -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    ) -> Self {
        self.clipboard = Arc::new(reader);
        self
    }
}

fn build_enricher(config: &Config) -> Option<Enricher> {
    if !config.translator.enabled {
        tracing::warn!("Translator disabled, meanings will not be filled in");
        return None;
    }

    let timeout = Duration::from_secs(config.timeout_seconds);

    let translator: Arc<dyn Translator> =
        match wordsaver_translator::from_config(&config.translator, timeout) {
            Ok(translator) => Arc::from(translator),
            Err(e) => {
                tracing::error!("failed to initialize translator: {}", e);
                return None;
            }
        };

    let related: Option<Arc<dyn RelatedWords>> = if config.lookup.enabled {
        match DatamuseClient::with_timeout(
            config.lookup.datamuse_url.clone(),
            config.lookup.max_results,
            timeout,
        ) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("failed to initialize related-word lookups: {}", e);
                None
            }
        }
    } else {
        tracing::info!("Synonym/antonym lookups disabled");
        None
    };

    tracing::info!(
        "Translating {} → {} with {}",
        config.translator.from_lang,
        config.translator.to_lang,
        translator.metadata().name
    );

    Some(Enricher::new(
        translator,
        related,
        config.translator.from_lang.clone(),
        config.translator.to_lang.clone(),
    ))
}
