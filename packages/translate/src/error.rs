use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language code: {0}")]
    Unsupported(String),
}

/// Failures a translation backend may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported language pair: {from} -> {to}")]
    UnsupportedPair { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write was denied: {0}")]
    Denied(String),
}

/// Outcome of a rejected workflow operation. None of these are fatal; the
/// workflow has already notified the user by the time one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("no text to translate")]
    Validation,

    #[error("a translation is already in progress")]
    Busy,

    #[error("translation was cancelled")]
    Cancelled,

    #[error(transparent)]
    Backend(#[from] TranslationError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
