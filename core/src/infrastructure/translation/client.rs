use reqwest::Client;

use crate::domain::{
    common::entities::app_errors::CoreError, translation::ports::TranslationProvider,
};
use crate::infrastructure::translation::cache::BoundedCache;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translation client backed by the public web translate endpoint, with a
/// bounded in-process result cache so repeated phrases are resolved locally.
#[derive(Debug, Clone)]
pub struct HttpTranslationClient {
    client: Client,
    cache: BoundedCache<String, String>,
}

impl HttpTranslationClient {
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            client: Client::new(),
            cache: BoundedCache::new(cache_capacity),
        }
    }
}

impl TranslationProvider for HttpTranslationClient {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, CoreError> {
        let key = format!("{}:{}", target_lang, text.to_lowercase().trim_end());

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let response = self
            .client
            .get(TRANSLATE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Translation request failed: {}", e);
                CoreError::ExternalServiceError(format!("translation error: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "translation service returned {}",
                response.status()
            )));
        }

        // The endpoint answers with nested arrays; the translated text is the
        // first element of each segment of the first array.
        let body: serde_json::Value = response.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("invalid translation response: {e}"))
        })?;

        let translated: String = body
            .get(0)
            .and_then(|segments| segments.as_array())
            .map(|segments| {
                segments
                    .iter()
                    .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
                    .collect()
            })
            .ok_or_else(|| {
                CoreError::ExternalServiceError("empty translation response".to_string())
            })?;

        self.cache.insert(key, translated.clone());

        Ok(translated)
    }
}
