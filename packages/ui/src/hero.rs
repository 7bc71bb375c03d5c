use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div { class: "hero_inner",
                span { class: "badge", "★ #1 AI Translation Platform" }
                h1 {
                    "Break Down"
                    span { class: "gradient_text", " Language Barriers" }
                }
                p { class: "lead",
                    "Experience the future of translation with our AI-powered platform. "
                    "Accurate, fast, and secure translations for over 100 languages."
                }

                div { class: "cta_row",
                    a { class: "btn primary", href: "#translate", "Start Translating →" }
                    a { class: "btn", href: "/about", "Learn More" }
                }
            }
        }
    }
}
