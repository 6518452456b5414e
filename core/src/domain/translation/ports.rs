use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Client port for the machine-translation fallback. Implementations own
/// their result cache; callers see a plain translate call.
#[cfg_attr(test, mockall::automock)]
pub trait TranslationProvider: Send + Sync {
    fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait TranslationService: Send + Sync {
    /// Best-effort translation to Italian: the static dictionary first, the
    /// provider as fallback. Never fails; returns the input unchanged when
    /// the provider is unavailable.
    fn translate_to_italian(&self, text: String) -> impl Future<Output = String> + Send;

    fn translate_all(&self, texts: Vec<String>) -> impl Future<Output = Vec<String>> + Send;
}
