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
                a { class: "btn primary", href: "/profile", "Create Account" }
                a { class: "btn", href: "/contact", "Contact Sales" }
            }
        }
    }
}
