use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;
use translate::{Language, TranslationWorkflow, WorkflowConfig};

use crate::EvalClipboard;

const TRANSLATE_CSS: Asset = asset!("/assets/styling/translate.css");

/// Source/target editor pair driven by a [`TranslationWorkflow`].
///
/// The workflow lives for as long as the panel is mounted. Its snapshots are
/// mirrored into a signal, which is the only state this component renders.
#[component]
pub fn TranslationPanel() -> Element {
    let toasts = crate::use_toasts();
    let workflow = use_hook(move || {
        Rc::new(TranslationWorkflow::with_stub(
            WorkflowConfig::default(),
            Rc::new(toasts),
            Rc::new(EvalClipboard),
        ))
    });

    let mut snapshot = use_signal({
        let workflow = workflow.clone();
        move || workflow.snapshot()
    });
    use_future({
        let workflow = workflow.clone();
        move || {
            let mut rx = workflow.subscribe();
            async move {
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    snapshot.set(next);
                }
            }
        }
    });

    let snap = snapshot();
    let source_name = snap.source_lang.name();
    let target_name = snap.target_lang.name();
    let char_count = snap.char_count();
    let has_result = snap.result().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: TRANSLATE_CSS }

        div { id: "translate", class: "translator",
            div { class: "lang_bar",
                LanguageSelect {
                    id: "source_lang",
                    value: snap.source_lang,
                    onchange: {
                        let workflow = workflow.clone();
                        move |lang: Language| workflow.set_source_lang(lang)
                    },
                }
                button {
                    class: "btn icon swap_btn",
                    title: "Swap languages",
                    onclick: {
                        let workflow = workflow.clone();
                        move |_| workflow.swap_languages()
                    },
                    "⇄"
                }
                LanguageSelect {
                    id: "target_lang",
                    value: snap.target_lang,
                    onchange: {
                        let workflow = workflow.clone();
                        move |lang: Language| workflow.set_target_lang(lang)
                    },
                }
            }

            div { class: "translator_grid",
                div { class: "card pane",
                    div { class: "pane_header",
                        h3 { "{source_name}" }
                    }
                    textarea {
                        id: "source_text",
                        value: "{snap.source_text}",
                        placeholder: "Enter text to translate...",
                        rows: 8,
                        oninput: {
                            let workflow = workflow.clone();
                            move |e: FormEvent| workflow.set_source_text(e.value())
                        },
                    }
                    span { class: "hint char_count", "{char_count} characters" }
                }

                div { class: "card pane",
                    div { class: "pane_header",
                        h3 { "{target_name}" }
                        button {
                            class: "btn icon",
                            title: "Copy translation",
                            disabled: !has_result,
                            onclick: {
                                let workflow = workflow.clone();
                                move |_| {
                                    let workflow = workflow.clone();
                                    spawn(async move {
                                        if let Err(err) = workflow.copy_result().await {
                                            debug!("translation_panel.copy: {err}");
                                        }
                                    });
                                }
                            },
                            "⧉"
                        }
                    }
                    div { id: "translated_text", class: "output",
                        if snap.pending {
                            div { class: "loading",
                                span { class: "spinner" }
                                span { class: "hint", "Translating..." }
                            }
                        } else if has_result {
                            p { class: "result", "{snap.translated_text}" }
                        } else {
                            p { class: "hint", "Translation will appear here..." }
                        }
                    }
                }
            }

            div { class: "translate_row",
                button {
                    id: "translate_btn",
                    class: "btn primary large",
                    disabled: !snap.can_submit(),
                    onclick: {
                        let workflow = workflow.clone();
                        move |_| {
                            let workflow = workflow.clone();
                            spawn(async move {
                                if let Err(err) = workflow.submit().await {
                                    debug!("translation_panel.submit: {err}");
                                }
                            });
                        }
                    },
                    if snap.pending {
                        span { class: "spinner" }
                        "Translating..."
                    } else {
                        "Translate"
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageSelect(id: String, value: Language, onchange: EventHandler<Language>) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "lang_select",
            value: value.code(),
            onchange: move |e: FormEvent| {
                if let Some(lang) = Language::from_code(&e.value()) {
                    onchange.call(lang);
                }
            },
            for (code, name) in Language::ALL.iter().map(|l| (l.code(), l.name())) {
                option { key: "{code}", value: code, selected: code == value.code(), "{name}" }
            }
        }
    }
}
