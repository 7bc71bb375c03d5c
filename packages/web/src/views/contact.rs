use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}
