use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("route.not_found: path={path}");

    rsx! {
        section { class: "not_found",
            h1 { "404" }
            p { class: "lead", "Oops! Page not found" }
            p { code { "{path}" } }
            a { class: "btn primary", href: "/", "Return to Home" }
        }
    }
}
