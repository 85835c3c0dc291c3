use async_trait::async_trait;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Keyless Google Translate web endpoint (`client=gtx`)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    async fn request(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<serde_json::Value, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })
    }
}

/// Concatenate the translated segments: `json[0][i][0]`
pub(crate) fn parse_translation(json: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(TranslateError::ApiError("Empty translation".to_string()));
    }

    Ok(text)
}

pub(crate) fn parse_detected_language(
    json: &serde_json::Value,
) -> Result<LanguageCode, TranslateError> {
    json.get(2)
        .and_then(|l| l.as_str())
        .map(|l| l.to_lowercase())
        .ok_or_else(|| TranslateError::ApiError("No detected language".to_string()))
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let json = self.request(text, &from, &to).await?;
        let translated_text = parse_translation(&json)?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let json = self.request(text, "auto", "en").await?;
        parse_detected_language(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joins_segments() {
        let body = json!([
            [["سلام ", "hello ", null, null, 10], ["دنیا", "world", null, null, 10]],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&body).unwrap(), "سلام دنیا");
        assert_eq!(parse_detected_language(&body).unwrap(), "en");
    }

    #[test]
    fn rejects_unexpected_shape() {
        assert!(parse_translation(&json!({ "error": "nope" })).is_err());
        assert!(parse_translation(&json!([[]])).is_err());
        assert!(parse_detected_language(&json!([[], null])).is_err());
    }
}
