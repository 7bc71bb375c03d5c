use dioxus::prelude::*;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        icon: "🌐",
        title: "100+ Languages",
        description: "Translate between over 100 languages instantly",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Get results in seconds with AI-powered translation",
    },
    Feature {
        icon: "🛡",
        title: "Secure & Private",
        description: "Your data is protected with enterprise-grade security",
    },
];

pub const ABOUT_FEATURES: &[Feature] = &[
    Feature {
        icon: "🌐",
        title: "100+ Languages",
        description: "Support for over 100 languages and dialects with high accuracy translation.",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Get instant translations with our advanced AI-powered translation engine.",
    },
    Feature {
        icon: "🛡",
        title: "Secure & Private",
        description: "Your data is encrypted and never stored. Complete privacy guaranteed.",
    },
    Feature {
        icon: "👥",
        title: "Team Collaboration",
        description: "Share translations with your team and collaborate on projects seamlessly.",
    },
    Feature {
        icon: "🏆",
        title: "Enterprise Grade",
        description: "Professional-grade accuracy trusted by businesses worldwide.",
    },
    Feature {
        icon: "🕑",
        title: "24/7 Available",
        description: "Access our translation service anytime, anywhere, on any device.",
    },
];

#[component]
pub fn FeatureGrid(heading: String, subheading: String, features: &'static [Feature]) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        section { class: "section features",
            div { class: "section_header",
                h2 { "{heading}" }
                p { class: "hint", "{subheading}" }
            }
            div { class: "card_grid",
                for feature in features.iter() {
                    div { key: "{feature.title}", class: "card feature",
                        div { class: "feature_icon", "{feature.icon}" }
                        h3 { "{feature.title}" }
                        p { class: "hint", "{feature.description}" }
                    }
                }
            }
        }
    }
}
