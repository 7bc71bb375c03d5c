use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use views::{About, Contact, Home, NotFound, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::TranslateTheme {}
        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// A desktop-specific Router around the shared page components
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        nav { class: "app_nav",
            div { class: "app_nav_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_mark" }
                    span { class: "brand_name", "TranslateAI" }
                }
                div { class: "nav_links",
                    Link { class: "nav_link", active_class: "active", to: Route::Home {}, "Home" }
                    Link { class: "nav_link", active_class: "active", to: Route::About {}, "About" }
                    Link { class: "nav_link", active_class: "active", to: Route::Contact {}, "Contact" }
                    Link { class: "nav_link", active_class: "active", to: Route::Profile {}, "Profile" }
                }
            }
        }
        main { class: "route_view", Outlet::<Route> {} }
    }
}
