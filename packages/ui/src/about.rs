use dioxus::prelude::*;

use crate::{FeatureGrid, ABOUT_FEATURES};

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

const STATS: &[(&str, &str)] = &[
    ("50M+", "Translations"),
    ("100+", "Languages"),
    ("99.9%", "Uptime"),
    ("500K+", "Users"),
];

const BADGES: &[&str] = &["AI-Powered", "Real-time", "Secure", "Global"];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }

        section { class: "page_hero",
            h1 {
                "Breaking Down"
                span { class: "gradient_text", " Language Barriers" }
            }
            p { class: "lead",
                "TranslateAI is the world's most advanced AI-powered translation platform, "
                "making global communication effortless and accurate for millions of users worldwide."
            }
            div { class: "badge_row",
                for badge in BADGES.iter() {
                    span { key: "{badge}", class: "badge", "{badge}" }
                }
            }
        }

        section { class: "section stats tinted",
            for (value, label) in STATS.iter() {
                div { key: "{label}", class: "stat",
                    div { class: "stat_value", "{value}" }
                    div { class: "hint", "{label}" }
                }
            }
        }

        FeatureGrid {
            heading: "Why Choose TranslateAI?",
            subheading: "Experience the future of translation with cutting-edge AI technology that understands context, culture, and nuance.",
            features: ABOUT_FEATURES,
        }

        section { class: "section mission tinted",
            h2 { "Our Mission" }
            p { class: "lead",
                "We believe that language should never be a barrier to human connection, "
                "understanding, and progress. Our mission is to create the most accurate, "
                "accessible, and intelligent translation platform that empowers people "
                "to communicate freely across cultures and languages."
            }
            div { class: "card gradient_card",
                blockquote {
                    "\"TranslateAI has revolutionized how our global team communicates. "
                    "The accuracy and speed are unmatched.\""
                }
                cite { "Sarah Chen, Global Communications Director" }
            }
        }
    }
}
