use dioxus::prelude::*;
use translate::contact::{send_message, ContactField, ContactForm, CONTACT_SEND_LATENCY};

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
    description: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉",
        title: "Email Us",
        detail: "support@translateai.com",
        description: "Send us an email anytime",
    },
    ContactInfo {
        icon: "☎",
        title: "Call Us",
        detail: "+1 (555) 123-4567",
        description: "Mon-Fri 9AM-6PM EST",
    },
    ContactInfo {
        icon: "⌂",
        title: "Visit Us",
        detail: "San Francisco, CA",
        description: "123 Innovation Drive",
    },
];

#[component]
pub fn ContactPage() -> Element {
    let toasts = crate::use_toasts();
    let mut form = use_signal(ContactForm::default);
    let mut sending = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if sending() {
            return;
        }
        let data = form();
        if let Err(err) = data.validate() {
            toasts.error("Please check the form".to_string(), Some(err.to_string()));
            return;
        }
        sending.set(true);
        let toasts = toasts.clone();
        spawn(async move {
            match send_message(&data, CONTACT_SEND_LATENCY).await {
                Ok(()) => {
                    toasts.success(
                        "Message sent successfully!".to_string(),
                        Some("We'll get back to you within 24 hours.".to_string()),
                    );
                    form.with_mut(|f| f.reset());
                }
                Err(err) => toasts.error("Message not sent".to_string(), Some(err.to_string())),
            }
            sending.set(false);
        });
    };

    let current = form();

    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }

        section { class: "page_hero",
            h1 {
                "Get In"
                span { class: "gradient_text", " Touch" }
            }
            p { class: "lead",
                "Have questions about TranslateAI? Need enterprise solutions? "
                "We're here to help you break down language barriers."
            }
        }

        section { class: "section contact_grid",
            div { class: "card",
                h2 { "Send us a message" }
                p { class: "hint", "Fill out the form below and we'll get back to you as soon as possible." }

                form { class: "contact_form", onsubmit: on_submit,
                    div { class: "field_row",
                        div { class: "field",
                            label { r#for: "name", "Name *" }
                            input {
                                id: "name",
                                name: "name",
                                value: "{current.name}",
                                placeholder: "Your full name",
                                oninput: move |e: FormEvent| form.with_mut(|f| f.set(ContactField::Name, e.value())),
                            }
                        }
                        div { class: "field",
                            label { r#for: "email", "Email *" }
                            input {
                                id: "email",
                                name: "email",
                                r#type: "email",
                                value: "{current.email}",
                                placeholder: "your@email.com",
                                oninput: move |e: FormEvent| form.with_mut(|f| f.set(ContactField::Email, e.value())),
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "subject", "Subject *" }
                        input {
                            id: "subject",
                            name: "subject",
                            value: "{current.subject}",
                            placeholder: "What is this about?",
                            oninput: move |e: FormEvent| form.with_mut(|f| f.set(ContactField::Subject, e.value())),
                        }
                    }
                    div { class: "field",
                        label { r#for: "message", "Message *" }
                        textarea {
                            id: "message",
                            name: "message",
                            value: "{current.message}",
                            placeholder: "Tell us more about your inquiry...",
                            rows: 6,
                            oninput: move |e: FormEvent| form.with_mut(|f| f.set(ContactField::Message, e.value())),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn primary wide",
                        disabled: sending(),
                        if sending() {
                            span { class: "spinner" }
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }
                }
            }

            div { class: "contact_side",
                h2 { "Contact Information" }
                for info in CONTACT_INFO.iter() {
                    div { key: "{info.title}", class: "card contact_info",
                        div { class: "feature_icon", "{info.icon}" }
                        div {
                            h3 { "{info.title}" }
                            p { class: "accent", "{info.detail}" }
                            p { class: "hint", "{info.description}" }
                        }
                    }
                }

                div { class: "card tinted",
                    h3 { "Quick Questions?" }
                    p { class: "hint",
                        "Check out our FAQ section for instant answers to common questions "
                        "about TranslateAI features, pricing, and integrations."
                    }
                    a { class: "btn wide", href: "/about", "View FAQ" }
                }

                div { class: "card gradient_card",
                    h3 { "Enterprise Solutions" }
                    p { "Need custom integrations or volume pricing? Our enterprise team is ready to help." }
                    a { class: "btn wide", href: "mailto:support@translateai.com", "Contact Enterprise Team" }
                }
            }
        }
    }
}
