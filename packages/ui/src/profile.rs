use dioxus::prelude::*;
use translate::profile::{
    demo_language_usage, demo_monthly_progress, demo_recent_translations, demo_stats,
    ProfileEditor,
};

const PROFILE_CSS: Asset = asset!("/assets/styling/profile.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Activity,
    Settings,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Activity => "Activity",
            Tab::Settings => "Settings",
        }
    }
}

const PREFERENCES: &[(&str, &str, &str)] = &[
    (
        "Email Notifications",
        "Receive updates about your translations",
        "Configure",
    ),
    (
        "Auto-save Translations",
        "Automatically save your translation history",
        "Enable",
    ),
    (
        "Default Languages",
        "Set your preferred source and target languages",
        "Set Default",
    ),
];

#[component]
pub fn ProfilePage() -> Element {
    let mut tab = use_signal(|| Tab::Overview);
    let editor = use_signal(ProfileEditor::default);

    rsx! {
        document::Link { rel: "stylesheet", href: PROFILE_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { "Profile" }
                p { class: "hint", "Manage your account settings and view your translation activity." }
            }

            div { class: "tabs", role: "tablist",
                for t in [Tab::Overview, Tab::Activity, Tab::Settings] {
                    button {
                        key: "{t.label()}",
                        class: if tab() == t { "tab active" } else { "tab" },
                        role: "tab",
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }

            match tab() {
                Tab::Overview => rsx! { OverviewTab { editor } },
                Tab::Activity => rsx! { ActivityTab {} },
                Tab::Settings => rsx! { SettingsTab { editor } },
            }
        }
    }
}

#[component]
fn OverviewTab(editor: Signal<ProfileEditor>) -> Element {
    let user = editor.read().saved().clone();
    let initials = user.initials();
    let editing = editor.read().is_editing();

    rsx! {
        div { class: "card",
            div { class: "profile_header",
                div { class: "profile_identity",
                    if let Some(url) = &user.avatar_url {
                        img { class: "avatar_img", src: "{url}", alt: "Avatar" }
                    } else {
                        span { class: "avatar_fallback", "{initials}" }
                    }
                    div {
                        h2 { "{user.name}" }
                        p { class: "hint", "{user.email}" }
                        div { class: "meta_row",
                            span { class: "badge", "{user.plan} Plan" }
                            span { class: "hint", "Joined {user.join_date}" }
                        }
                    }
                }
                button {
                    class: if editing { "btn active" } else { "btn" },
                    onclick: move |_| {
                        let mut editor = editor;
                        editor.with_mut(|e| e.toggle_editing());
                    },
                    "Edit Profile"
                }
            }

            div { class: "stat_grid",
                for stat in demo_stats() {
                    div { key: "{stat.label}", class: "card stat",
                        div { class: "stat_value", "{stat.value}" }
                        div { class: "hint", "{stat.label}" }
                    }
                }
            }
        }

        div { class: "card",
            h3 { "Most Used Languages" }
            for usage in demo_language_usage() {
                div { key: "{usage.language}", class: "usage_row",
                    span { class: "usage_label", {usage.language.name()} }
                    div { class: "progress",
                        div { class: "progress_fill", style: "width: {usage.percent}%" }
                    }
                    span { class: "hint", "{usage.percent}%" }
                }
            }
        }
    }
}

#[component]
fn ActivityTab() -> Element {
    rsx! {
        div { class: "card",
            h3 { "Recent Translations" }
            for (i, item) in demo_recent_translations().into_iter().enumerate() {
                div { key: "{i}", class: "recent",
                    div { class: "recent_meta",
                        span { class: "badge outline", {item.from.name()} }
                        span { class: "hint", "→" }
                        span { class: "badge outline", {item.to.name()} }
                        span { class: "hint when", "{item.when}" }
                    }
                    p { "{item.text}" }
                }
            }
        }

        div { class: "card",
            h3 { "This Month's Progress" }
            div { class: "stat_grid three",
                for progress in demo_monthly_progress() {
                    div { key: "{progress.label}", class: "stat",
                        div { class: "stat_value", "{progress.value}" }
                        div { class: "hint", "{progress.label}" }
                        div { class: "trend", "{progress.trend}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsTab(editor: Signal<ProfileEditor>) -> Element {
    let toasts = crate::use_toasts();
    let draft = editor.read().draft().clone();
    let editing = editor.read().is_editing();
    let mut editor = editor;

    rsx! {
        div { class: "card",
            h3 { "Account Settings" }
            div { class: "settings_form",
                label { r#for: "profile_name", "Full Name" }
                input {
                    id: "profile_name",
                    value: "{draft.name}",
                    disabled: !editing,
                    oninput: move |e: FormEvent| editor.with_mut(|ed| ed.set_name(e.value())),
                }
                label { r#for: "profile_email", "Email" }
                input {
                    id: "profile_email",
                    r#type: "email",
                    value: "{draft.email}",
                    disabled: !editing,
                    oninput: move |e: FormEvent| editor.with_mut(|ed| ed.set_email(e.value())),
                }
                if editing {
                    button {
                        class: "btn primary",
                        onclick: move |_| {
                            let saved = editor.with_mut(|ed| ed.save().map(|_| ()));
                            match saved {
                                Ok(()) => toasts.success(
                                    "Profile updated".to_string(),
                                    Some("Your profile has been successfully updated.".to_string()),
                                ),
                                Err(err) => toasts.error(
                                    "Profile not saved".to_string(),
                                    Some(err.to_string()),
                                ),
                            }
                        },
                        "Save Changes"
                    }
                } else {
                    p { class: "hint", "Use \"Edit Profile\" on the Overview tab to change these." }
                }
            }
        }

        div { class: "card",
            h3 { "Preferences" }
            for (title, description, action) in PREFERENCES.iter() {
                div { key: "{title}", class: "pref_row",
                    div {
                        div { class: "pref_title", "{title}" }
                        div { class: "hint", "{description}" }
                    }
                    button { class: "btn small", disabled: true, "{action}" }
                }
            }
        }

        div { class: "card",
            h3 { "Subscription" }
            div { class: "pref_row",
                div {
                    div { class: "pref_title", "Pro Plan" }
                    div { class: "hint", "Unlimited translations, priority support" }
                }
                button { class: "btn", disabled: true, "Manage Subscription" }
            }
        }
    }
}
