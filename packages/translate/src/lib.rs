//! This crate contains the platform-independent state behind the TranslateAI
//! front end: the translation workflow, its backend seam, and the small form
//! models used by the contact and profile pages.

pub mod backend;
pub mod clipboard;
pub mod config;
pub mod contact;
pub mod error;
pub mod language;
pub mod notify;
pub mod profile;
pub mod time;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod workflow_tests;

pub use backend::{StubTranslator, Translator};
pub use clipboard::Clipboard;
pub use config::WorkflowConfig;
pub use error::{ClipboardError, TranslationError, WorkflowError};
pub use language::Language;
pub use notify::{Notification, Notifier, Severity};
pub use types::{TranslationRequest, TranslationResult, WorkflowSnapshot};
pub use workflow::TranslationWorkflow;
