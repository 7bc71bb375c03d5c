//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod features;
pub use features::{FeatureGrid, ABOUT_FEATURES, HOME_FEATURES};

mod translation;
pub use translation::TranslationPanel;

mod clipboard;
pub use clipboard::EvalClipboard;

mod about;
pub use about::AboutPage;

mod contact;
pub use contact::ContactPage;

mod profile;
pub use profile::ProfilePage;

mod theme;
pub use theme::TranslateTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};
