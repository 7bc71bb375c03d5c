use serde::{Deserialize, Serialize};

use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_lang: Language,
    pub target_lang: Language,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, source_lang: Language, target_lang: Language) -> Self {
        Self {
            source_text: source_text.into(),
            source_lang,
            target_lang,
        }
    }

    /// Submittable text is anything with a non-whitespace character.
    pub fn is_valid(&self) -> bool {
        !self.source_text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
}

impl TranslationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Observable state of a [`crate::TranslationWorkflow`], republished after
/// every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub source_text: String,
    /// Empty until the first successful submission.
    pub translated_text: String,
    pub source_lang: Language,
    pub target_lang: Language,
    pub pending: bool,
}

impl WorkflowSnapshot {
    pub fn new(source_lang: Language, target_lang: Language) -> Self {
        Self {
            source_text: String::new(),
            translated_text: String::new(),
            source_lang,
            target_lang,
            pending: false,
        }
    }

    pub fn request(&self) -> TranslationRequest {
        TranslationRequest::new(self.source_text.clone(), self.source_lang, self.target_lang)
    }

    pub fn result(&self) -> Option<&str> {
        if self.translated_text.is_empty() {
            None
        } else {
            Some(&self.translated_text)
        }
    }

    /// Whether the Translate trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.source_text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.source_text.chars().count()
    }
}
