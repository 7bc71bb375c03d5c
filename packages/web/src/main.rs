use dioxus::prelude::*;
use std::env;

use views::{About, Contact, Home, NotFound, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    init_tracing();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may already have installed a subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let defaults = translate::WorkflowConfig::default();

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!(
        "startup: languages={}->{} stub_latency={}ms",
        defaults.default_source,
        defaults.default_target,
        defaults.stub_latency.as_millis()
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::TranslateTheme {}
        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared page components
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
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
        footer { class: "app_footer", "© 2025 TranslateAI. Breaking down language barriers." }
    }
}
