use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::TranslationError;
use crate::types::{TranslationRequest, TranslationResult};

/// Trait for translation backend implementations
#[async_trait(?Send)]
pub trait Translator {
    fn name(&self) -> &'static str;

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError>;
}

/// Placeholder backend: waits a fixed latency, then labels the input with the
/// language pair instead of translating it.
#[derive(Debug, Clone)]
pub struct StubTranslator {
    latency: Duration,
}

impl StubTranslator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The deterministic output for a request, without the wait.
    pub fn render(request: &TranslationRequest) -> String {
        format!(
            "[Translated from {} to {}] {}",
            request.source_lang.code(),
            request.target_lang.code(),
            request.source_text
        )
    }
}

#[async_trait(?Send)]
impl Translator for StubTranslator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        debug!(
            "backend.stub.translate: {}->{} text_len={} latency_ms={}",
            request.source_lang,
            request.target_lang,
            request.source_text.len(),
            self.latency.as_millis()
        );
        crate::time::sleep(self.latency).await;
        Ok(TranslationResult::new(Self::render(request)))
    }
}
