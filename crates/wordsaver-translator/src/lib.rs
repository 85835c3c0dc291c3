use std::time::Duration;

use wordsaver_config::translator::TranslatorConfig;

mod deepl;
mod google;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Detect language of text
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unsupported translation provider: {0}")]
    UnsupportedProvider(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Build the provider named in the config
pub fn from_config(
    config: &TranslatorConfig,
    timeout: Duration,
) -> Result<Box<dyn Translator>, TranslateError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    match config.provider.to_ascii_lowercase().as_str() {
        "google" => Ok(Box::new(GoogleTranslator::with_client(
            client,
            config.api_url.clone(),
        ))),
        "deepl" => {
            if config.api_key.is_empty() {
                return Err(TranslateError::AuthenticationError);
            }
            Ok(Box::new(DeepLTranslator::with_client(
                client,
                config.api_key.clone(),
                config.api_url.clone(),
            )))
        }
        other => Err(TranslateError::UnsupportedProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_google_by_default() {
        let translator = from_config(&TranslatorConfig::default(), Duration::from_secs(1)).unwrap();
        assert_eq!(translator.metadata().name, "Google");
        assert!(!translator.metadata().requires_api_key);
    }

    #[test]
    fn deepl_requires_key() {
        let config = TranslatorConfig {
            provider: "DeepL".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            from_config(&config, Duration::from_secs(1)),
            Err(TranslateError::AuthenticationError)
        ));

        let config = TranslatorConfig {
            api_key: "key".to_string(),
            ..config
        };
        let translator = from_config(&config, Duration::from_secs(1)).unwrap();
        assert_eq!(translator.metadata().name, "DeepL");
    }

    #[test]
    fn unknown_provider() {
        let config = TranslatorConfig {
            provider: "babelfish".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            from_config(&config, Duration::from_secs(1)),
            Err(TranslateError::UnsupportedProvider(p)) if p == "babelfish"
        ));
    }
}
