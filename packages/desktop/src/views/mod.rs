//! Desktop routes map one-to-one onto the shared pages in `ui`.

use dioxus::prelude::*;
use ui::{FeatureGrid, Hero, TranslationPanel, HOME_FEATURES};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        TranslationPanel {}
        FeatureGrid {
            heading: "Why Choose TranslateAI?",
            subheading: "Fast, accurate translation across the languages your team works in.",
            features: HOME_FEATURES,
        }
        section { class: "section closing_cta",
            h2 { "Ready to Get Started?" }
            p { class: "hint", "Join thousands of users who trust TranslateAI for their translation needs." }
            div { class: "cta_row",
                Link { class: "btn primary", to: crate::Route::Profile {}, "Create Account" }
                Link { class: "btn", to: crate::Route::Contact {}, "Contact Sales" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! { ui::AboutPage {} }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ui::ProfilePage {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("route.not_found: path={path}");

    rsx! {
        section { class: "not_found",
            h1 { "404" }
            p { class: "lead", "Oops! Page not found" }
            p { code { "{path}" } }
            Link { class: "btn primary", to: crate::Route::Home {}, "Return to Home" }
        }
    }
}
