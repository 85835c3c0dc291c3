use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

/// Word relation supported by the lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Synonym,
    Antonym,
}

impl Relation {
    /// Datamuse query key
    pub fn query_key(self) -> &'static str {
        match self {
            Relation::Synonym => "rel_syn",
            Relation::Antonym => "rel_ant",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Source of synonyms/antonyms
#[async_trait]
pub trait RelatedWords: Send + Sync {
    async fn related(&self, word: &str, relation: Relation) -> Result<Vec<String>, LookupError>;
}

#[derive(Clone)]
pub struct DatamuseClient {
    base_url: String,
    max_results: u32,
    client: reqwest::Client,
}

impl DatamuseClient {
    pub fn new(base_url: String, max_results: u32) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, max_results)
    }

    pub fn with_timeout(
        base_url: String,
        max_results: u32,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, max_results))
    }

    pub fn with_client(client: reqwest::Client, base_url: String, max_results: u32) -> Self {
        Self {
            base_url,
            max_results,
            client,
        }
    }

    pub async fn synonyms(&self, word: &str) -> Result<Vec<String>, LookupError> {
        self.related(word, Relation::Synonym).await
    }

    pub async fn antonyms(&self, word: &str) -> Result<Vec<String>, LookupError> {
        self.related(word, Relation::Antonym).await
    }
}

#[async_trait]
impl RelatedWords for DatamuseClient {
    async fn related(&self, word: &str, relation: Relation) -> Result<Vec<String>, LookupError> {
        let max = self.max_results.to_string();
        let params = [(relation.query_key(), word), ("max", max.as_str())];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Api(format!("HTTP {}", response.status())));
        }

        let entries: Vec<DatamuseWord> = response
            .json()
            .await
            .map_err(|e| LookupError::Api(format!("Failed to parse response: {}", e)))?;

        tracing::debug!("{} {:?} results for '{}'", entries.len(), relation, word);
        Ok(entries.into_iter().map(|e| e.word).collect())
    }
}

#[derive(Deserialize)]
struct DatamuseWord {
    word: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datamuse_payload() {
        let body = r#"[{"word":"glad","score":1290},{"word":"felicitous","score":800,"tags":["adj"]}]"#;
        let entries: Vec<DatamuseWord> = serde_json::from_str(body).unwrap();
        let words: Vec<_> = entries.into_iter().map(|e| e.word).collect();
        assert_eq!(words, ["glad", "felicitous"]);
    }

    #[test]
    fn relation_keys() {
        assert_eq!(Relation::Synonym.query_key(), "rel_syn");
        assert_eq!(Relation::Antonym.query_key(), "rel_ant");
    }
}
