//! The translation request workflow.
//!
//! A workflow owns the text and language selection of one translation panel,
//! forwards submissions to a [`Translator`], and republishes a
//! [`WorkflowSnapshot`] after every change. It is meant to live inside a
//! single UI context: nothing here is `Send`, and all mutation happens on the
//! caller's task.
//!
//! At most one submission is in flight. A second `submit` while pending is
//! rejected with [`WorkflowError::Busy`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::{StubTranslator, Translator};
use crate::clipboard::Clipboard;
use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use crate::language::Language;
use crate::notify::{Notification, Notifier};
use crate::types::{TranslationResult, WorkflowSnapshot};

struct InFlight {
    seq: u64,
    abort: AbortHandle,
}

pub struct TranslationWorkflow {
    state: watch::Sender<WorkflowSnapshot>,
    backend: Rc<dyn Translator>,
    notifier: Rc<dyn Notifier>,
    clipboard: Rc<dyn Clipboard>,
    in_flight: RefCell<Option<InFlight>>,
    next_seq: Cell<u64>,
}

impl std::fmt::Debug for TranslationWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationWorkflow")
            .field("backend", &self.backend.name())
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl TranslationWorkflow {
    pub fn new(
        config: WorkflowConfig,
        backend: Rc<dyn Translator>,
        notifier: Rc<dyn Notifier>,
        clipboard: Rc<dyn Clipboard>,
    ) -> Self {
        debug!(
            "workflow.new: backend={} default_pair={}->{}",
            backend.name(),
            config.default_source,
            config.default_target
        );
        Self {
            state: watch::Sender::new(WorkflowSnapshot::new(
                config.default_source,
                config.default_target,
            )),
            backend,
            notifier,
            clipboard,
            in_flight: RefCell::new(None),
            next_seq: Cell::new(0),
        }
    }

    /// Workflow backed by [`StubTranslator`] using the configured latency.
    pub fn with_stub(
        config: WorkflowConfig,
        notifier: Rc<dyn Notifier>,
        clipboard: Rc<dyn Clipboard>,
    ) -> Self {
        let backend = Rc::new(StubTranslator::new(config.stub_latency));
        Self::new(config, backend, notifier, clipboard)
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.state.borrow().clone()
    }

    /// Receive a new snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.state.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.borrow().is_some()
    }

    pub fn set_source_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_if_modified(|s| {
            if s.source_text == text {
                return false;
            }
            s.source_text = text;
            true
        });
    }

    pub fn set_source_lang(&self, lang: Language) {
        self.state.send_if_modified(|s| {
            let changed = s.source_lang != lang;
            s.source_lang = lang;
            changed
        });
    }

    pub fn set_target_lang(&self, lang: Language) {
        self.state.send_if_modified(|s| {
            let changed = s.target_lang != lang;
            s.target_lang = lang;
            changed
        });
    }

    /// Translate the current source text.
    ///
    /// Rejected without a state change when the text is blank or another
    /// submission is pending. Every outcome except `Busy` is also reported
    /// through the notifier.
    pub async fn submit(&self) -> Result<TranslationResult, WorkflowError> {
        if self.is_pending() {
            debug!("workflow.submit: rejected, translation already pending");
            return Err(WorkflowError::Busy);
        }

        let request = self.state.borrow().request();
        if !request.is_valid() {
            warn!("workflow.submit: empty source text");
            self.notifier.notify(Notification::destructive(
                "No text to translate",
                "Please enter some text to translate.",
            ));
            return Err(WorkflowError::Validation);
        }

        let seq = self.next_seq.get() + 1;
        self.next_seq.set(seq);
        let (abort, registration) = AbortHandle::new_pair();
        *self.in_flight.borrow_mut() = Some(InFlight { seq, abort });
        self.state.send_modify(|s| s.pending = true);
        debug!(
            "workflow.submit: seq={seq} {}->{} text_len={}",
            request.source_lang,
            request.target_lang,
            request.source_text.len()
        );

        let mut guard = PendingGuard {
            workflow: self,
            seq,
            released: false,
        };
        let backend = Rc::clone(&self.backend);
        let outcome = Abortable::new(
            async move { backend.translate(&request).await },
            registration,
        )
        .await;

        if !guard.release() {
            debug!("workflow.submit: seq={seq} cancelled");
            return Err(WorkflowError::Cancelled);
        }

        // Only `cancel` aborts, and it has already cleared `in_flight`.
        let Ok(outcome) = outcome else {
            return Err(WorkflowError::Cancelled);
        };

        match outcome {
            Ok(result) => {
                self.state.send_modify(|s| {
                    s.translated_text = result.text.clone();
                    s.pending = false;
                });
                info!("workflow.submit: seq={seq} completed result_len={}", result.text.len());
                self.notifier.notify(Notification::normal(
                    "Translation completed",
                    "Your text has been successfully translated.",
                ));
                Ok(result)
            }
            Err(err) => {
                self.state.send_modify(|s| s.pending = false);
                warn!("workflow.submit: seq={seq} backend error: {err}");
                self.notifier
                    .notify(Notification::destructive("Translation failed", err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Abort the in-flight submission, if any. Its result is discarded.
    pub fn cancel(&self) -> bool {
        let Some(in_flight) = self.in_flight.borrow_mut().take() else {
            return false;
        };
        in_flight.abort.abort();
        self.state.send_modify(|s| s.pending = false);
        debug!("workflow.cancel: seq={}", in_flight.seq);
        true
    }

    /// Swap the language pair and move the last result into the input.
    pub fn swap_languages(&self) {
        self.state.send_modify(|s| {
            std::mem::swap(&mut s.source_lang, &mut s.target_lang);
            std::mem::swap(&mut s.source_text, &mut s.translated_text);
        });
        debug!("workflow.swap_languages");
    }

    /// Copy arbitrary text to the clipboard. Never touches workflow state.
    pub async fn copy(&self, text: &str) -> Result<(), WorkflowError> {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                debug!("workflow.copy: len={}", text.len());
                self.notifier.notify(Notification::normal(
                    "Copied to clipboard",
                    "Text has been copied to your clipboard.",
                ));
                Ok(())
            }
            Err(err) => {
                warn!("workflow.copy: {err}");
                self.notifier.notify(Notification::destructive(
                    "Failed to copy",
                    "Unable to copy text to clipboard.",
                ));
                Err(err.into())
            }
        }
    }

    pub async fn copy_result(&self) -> Result<(), WorkflowError> {
        let text = self.state.borrow().translated_text.clone();
        self.copy(&text).await
    }
}

/// Clears the pending state if a submission future is dropped mid-flight.
struct PendingGuard<'a> {
    workflow: &'a TranslationWorkflow,
    seq: u64,
    released: bool,
}

impl PendingGuard<'_> {
    /// Returns false when this submission is no longer the one in flight.
    fn release(&mut self) -> bool {
        self.released = true;
        let mut in_flight = self.workflow.in_flight.borrow_mut();
        match in_flight.as_ref() {
            Some(current) if current.seq == self.seq => {
                *in_flight = None;
                true
            }
            _ => false,
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if self.release() {
            self.workflow.state.send_modify(|s| s.pending = false);
            debug!("workflow.submit: seq={} dropped before completion", self.seq);
        }
    }
}
