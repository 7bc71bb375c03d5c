#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::poll;

use crate::backend::{StubTranslator, Translator};
use crate::clipboard::{Clipboard, NoClipboard};
use crate::config::WorkflowConfig;
use crate::error::{ClipboardError, TranslationError, WorkflowError};
use crate::language::Language;
use crate::notify::{Notification, Notifier, NullNotifier, Severity};
use crate::types::{TranslationRequest, TranslationResult};
use crate::workflow::TranslationWorkflow;

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    fn titles(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

#[derive(Default)]
struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

#[async_trait(?Send)]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

struct OfflineTranslator;

#[async_trait(?Send)]
impl Translator for OfflineTranslator {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn translate(
        &self,
        _request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        crate::time::sleep(Duration::from_millis(10)).await;
        Err(TranslationError::Unavailable("connection refused".into()))
    }
}

fn stub_workflow(notifier: Rc<RecordingNotifier>) -> TranslationWorkflow {
    TranslationWorkflow::with_stub(
        WorkflowConfig::default(),
        notifier,
        Rc::new(MemoryClipboard::default()),
    )
}

#[tokio::test(start_paused = true)]
async fn hello_en_es_completes_with_one_success_toast() {
    let notifier = Rc::new(RecordingNotifier::default());
    let wf = stub_workflow(notifier.clone());
    wf.set_source_text("Hello");

    let result = wf.submit().await.unwrap();

    let expected = StubTranslator::render(&TranslationRequest::new("Hello", Language::En, Language::Es));
    assert_eq!(result.text, expected);
    let snap = wf.snapshot();
    assert_eq!(snap.translated_text, expected);
    assert!(!snap.pending);
    assert_eq!(notifier.titles(), vec!["Translation completed".to_string()]);
    assert_eq!(notifier.seen.borrow()[0].severity, Severity::Normal);
}

#[tokio::test(start_paused = true)]
async fn blank_text_is_rejected_without_pending() {
    for text in ["", "   ", "\n\t "] {
        let notifier = Rc::new(RecordingNotifier::default());
        let wf = stub_workflow(notifier.clone());
        wf.set_source_text(text);
        let mut rx = wf.subscribe();

        assert_eq!(wf.submit().await, Err(WorkflowError::Validation));

        assert!(!wf.is_pending());
        assert!(!rx.has_changed().unwrap());
        let seen = notifier.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].title, "No text to translate");
        assert!(seen[0].is_destructive());
    }
}

#[tokio::test(start_paused = true)]
async fn pending_spans_exactly_the_simulated_latency() {
    let notifier = Rc::new(RecordingNotifier::default());
    let wf = stub_workflow(notifier.clone());
    wf.set_source_text("Guten Tag");

    let submit = wf.submit();
    tokio::pin!(submit);
    assert!(poll!(&mut submit).is_pending());
    assert!(wf.snapshot().pending);

    tokio::time::advance(Duration::from_millis(1499)).await;
    assert!(poll!(&mut submit).is_pending());
    assert!(wf.snapshot().pending);
    assert!(notifier.titles().is_empty());

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(poll!(&mut submit).is_ready());
    assert!(!wf.snapshot().pending);
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_pending_is_busy() {
    let notifier = Rc::new(RecordingNotifier::default());
    let wf = stub_workflow(notifier.clone());
    wf.set_source_text("one");

    let first = wf.submit();
    tokio::pin!(first);
    assert!(poll!(&mut first).is_pending());

    wf.set_source_text("two");
    assert_eq!(wf.submit().await, Err(WorkflowError::Busy));
    assert!(wf.snapshot().pending);

    let result = first.await.unwrap();
    assert!(result.text.ends_with(" one"));
    assert_eq!(notifier.titles(), vec!["Translation completed".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn swap_twice_restores_everything() {
    let wf = TranslationWorkflow::with_stub(
        WorkflowConfig::default(),
        Rc::new(NullNotifier),
        Rc::new(NoClipboard),
    );
    wf.set_source_text("Hello");
    wf.submit().await.unwrap();
    let before = wf.snapshot();

    wf.swap_languages();
    let swapped = wf.snapshot();
    assert_eq!(swapped.source_lang, Language::Es);
    assert_eq!(swapped.target_lang, Language::En);
    assert_eq!(swapped.source_text, before.translated_text);
    assert_eq!(swapped.translated_text, "Hello");

    wf.swap_languages();
    assert_eq!(wf.snapshot(), before);
}

#[tokio::test(start_paused = true)]
async fn swap_while_pending_keeps_pending() {
    let wf = stub_workflow(Rc::new(RecordingNotifier::default()));
    wf.set_source_text("Hola");

    let submit = wf.submit();
    tokio::pin!(submit);
    assert!(poll!(&mut submit).is_pending());

    wf.swap_languages();
    assert!(wf.snapshot().pending);
    assert_eq!(wf.snapshot().source_text, "");

    submit.await.unwrap();
    assert_eq!(wf.snapshot().translated_text, "[Translated from en to es] Hola");
}

#[tokio::test]
async fn copy_without_clipboard_only_notifies() {
    let notifier = Rc::new(RecordingNotifier::default());
    let wf = TranslationWorkflow::with_stub(
        WorkflowConfig::default(),
        notifier.clone(),
        Rc::new(NoClipboard),
    );
    wf.set_source_text("keep me");
    let before = wf.snapshot();

    let err = wf.copy("anything").await.unwrap_err();

    assert_eq!(err, WorkflowError::Clipboard(ClipboardError::Unavailable));
    assert_eq!(wf.snapshot(), before);
    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title, "Failed to copy");
    assert!(seen[0].is_destructive());
}

#[tokio::test(start_paused = true)]
async fn copy_result_writes_translation() {
    let notifier = Rc::new(RecordingNotifier::default());
    let clipboard = Rc::new(MemoryClipboard::default());
    let wf = TranslationWorkflow::with_stub(
        WorkflowConfig::default(),
        notifier.clone(),
        clipboard.clone(),
    );
    wf.set_source_text("Ciao");
    wf.set_source_lang(Language::It);
    wf.submit().await.unwrap();

    wf.copy_result().await.unwrap();

    assert_eq!(
        clipboard.contents.borrow().as_deref(),
        Some("[Translated from it to es] Ciao")
    );
    assert_eq!(
        notifier.titles(),
        vec!["Translation completed".to_string(), "Copied to clipboard".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn cancel_discards_the_result() {
    let notifier = Rc::new(RecordingNotifier::default());
    let wf = stub_workflow(notifier.clone());
    wf.set_source_text("Hello");

    let submit = wf.submit();
    tokio::pin!(submit);
    assert!(poll!(&mut submit).is_pending());

    assert!(wf.cancel());
    assert!(!wf.snapshot().pending);
    assert!(!wf.cancel());

    assert_eq!(submit.await, Err(WorkflowError::Cancelled));
    assert_eq!(wf.snapshot().translated_text, "");
    assert!(notifier.titles().is_empty());
}

#[tokio::test(start_paused = true)]
async fn stale_completion_does_not_clear_a_newer_submission() {
    let wf = stub_workflow(Rc::new(RecordingNotifier::default()));
    wf.set_source_text("first");

    let first = wf.submit();
    tokio::pin!(first);
    assert!(poll!(&mut first).is_pending());
    wf.cancel();

    wf.set_source_text("second");
    let second = wf.submit();
    tokio::pin!(second);
    assert!(poll!(&mut second).is_pending());

    assert_eq!(first.await, Err(WorkflowError::Cancelled));
    assert!(wf.snapshot().pending);

    second.await.unwrap();
    assert_eq!(wf.snapshot().translated_text, "[Translated from en to es] second");
}

#[tokio::test(start_paused = true)]
async fn dropping_a_submission_clears_pending() {
    let wf = stub_workflow(Rc::new(RecordingNotifier::default()));
    wf.set_source_text("Hello");

    {
        let submit = wf.submit();
        tokio::pin!(submit);
        assert!(poll!(&mut submit).is_pending());
        assert!(wf.is_pending());
    }

    assert!(!wf.is_pending());
    assert!(!wf.snapshot().pending);
}

#[tokio::test(start_paused = true)]
async fn backend_failure_keeps_previous_result() {
    let notifier = Rc::new(RecordingNotifier::default());
    let wf = TranslationWorkflow::new(
        WorkflowConfig::default(),
        Rc::new(OfflineTranslator),
        notifier.clone(),
        Rc::new(NoClipboard),
    );
    wf.set_source_text("Hello");

    let err = wf.submit().await.unwrap_err();

    assert!(matches!(err, WorkflowError::Backend(TranslationError::Unavailable(_))));
    assert!(!wf.snapshot().pending);
    assert_eq!(wf.snapshot().translated_text, "");
    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title, "Translation failed");
    assert_eq!(seen[0].description, "translation service unavailable: connection refused");
}

#[test]
fn setters_publish_only_real_changes() {
    let wf = TranslationWorkflow::with_stub(
        WorkflowConfig::default(),
        Rc::new(NullNotifier),
        Rc::new(NoClipboard),
    );
    let mut rx = wf.subscribe();

    wf.set_source_text("Hi");
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().source_text, "Hi");

    wf.set_source_text("Hi");
    wf.set_source_lang(Language::En);
    assert!(!rx.has_changed().unwrap());

    wf.set_target_lang(Language::Ja);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().target_lang, Language::Ja);
}
