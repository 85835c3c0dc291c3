use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_datamuse_url() -> String {
    "https://api.datamuse.com/words".to_string()
}

fn default_max_results() -> u32 {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Synonym/antonym lookups during enrichment
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_datamuse_url")]
    pub datamuse_url: String,
    /// Upper bound on related words per relation
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            datamuse_url: default_datamuse_url(),
            max_results: default_max_results(),
        }
    }
}
