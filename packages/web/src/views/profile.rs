use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    rsx! { ui::ProfilePage {} }
}
