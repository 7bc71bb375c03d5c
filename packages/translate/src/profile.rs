//! Demo account shown on the profile dashboard. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::contact::is_valid_email;
use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("{0} is not a valid email address")]
    InvalidEmail(String),

    #[error("profile is not being edited")]
    NotEditing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub plan: String,
    pub avatar_url: Option<String>,
}

impl UserInfo {
    pub fn demo() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            join_date: "March 2023".to_string(),
            plan: "Pro".to_string(),
            avatar_url: None,
        }
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let mut parts = self.name.split_whitespace();
        let a = parts.next().and_then(|s| s.chars().next());
        let b = parts.next().and_then(|s| s.chars().next());
        match (a, b) {
            (Some(a), Some(b)) => format!("{}{}", a.to_uppercase(), b.to_uppercase()),
            (Some(a), None) => a.to_uppercase().to_string(),
            _ => "U".to_string(),
        }
    }
}

/// Edit-mode toggle for the settings tab. Edits go to a draft that only
/// replaces the saved info on a successful [`ProfileEditor::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    saved: UserInfo,
    draft: UserInfo,
    editing: bool,
}

impl ProfileEditor {
    pub fn new(info: UserInfo) -> Self {
        Self {
            draft: info.clone(),
            saved: info,
            editing: false,
        }
    }

    pub fn saved(&self) -> &UserInfo {
        &self.saved
    }

    pub fn draft(&self) -> &UserInfo {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter or leave edit mode. Leaving without saving drops the draft.
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        self.draft = self.saved.clone();
    }

    pub fn set_name(&mut self, name: String) {
        if self.editing {
            self.draft.name = name;
        }
    }

    pub fn set_email(&mut self, email: String) {
        if self.editing {
            self.draft.email = email;
        }
    }

    pub fn save(&mut self) -> Result<&UserInfo, ProfileError> {
        if !self.editing {
            return Err(ProfileError::NotEditing);
        }
        let name = self.draft.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let email = self.draft.email.trim();
        if !is_valid_email(email) {
            return Err(ProfileError::InvalidEmail(email.to_string()));
        }
        self.draft.name = name.to_string();
        self.draft.email = email.to_string();
        self.saved = self.draft.clone();
        self.editing = false;
        info!("profile.save: name_len={}", self.saved.name.len());
        Ok(&self.saved)
    }
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::new(UserInfo::demo())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentTranslation {
    pub from: Language,
    pub to: Language,
    pub text: &'static str,
    pub when: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageUsage {
    pub language: Language,
    /// Share of translations, 0..=100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyProgress {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

pub fn demo_stats() -> Vec<UsageStat> {
    vec![
        UsageStat { label: "Translations", value: "2,847" },
        UsageStat { label: "Languages Used", value: "12" },
        UsageStat { label: "Words Translated", value: "45.2K" },
        UsageStat { label: "Time Saved", value: "127 hrs" },
    ]
}

pub fn demo_recent_translations() -> Vec<RecentTranslation> {
    vec![
        RecentTranslation {
            from: Language::En,
            to: Language::Es,
            text: "Hello, how are you?",
            when: "2 hours ago",
        },
        RecentTranslation {
            from: Language::Fr,
            to: Language::En,
            text: "Bonjour, comment allez-vous?",
            when: "5 hours ago",
        },
        RecentTranslation {
            from: Language::De,
            to: Language::En,
            text: "Guten Tag, wie geht es Ihnen?",
            when: "1 day ago",
        },
        RecentTranslation {
            from: Language::Ja,
            to: Language::En,
            text: "こんにちは、元気ですか？",
            when: "2 days ago",
        },
    ]
}

pub fn demo_language_usage() -> Vec<LanguageUsage> {
    vec![
        LanguageUsage { language: Language::Es, percent: 85 },
        LanguageUsage { language: Language::Fr, percent: 72 },
        LanguageUsage { language: Language::De, percent: 58 },
        LanguageUsage { language: Language::It, percent: 43 },
        LanguageUsage { language: Language::Pt, percent: 31 },
    ]
}

pub fn demo_monthly_progress() -> Vec<MonthlyProgress> {
    vec![
        MonthlyProgress { label: "Translations", value: "324", trend: "+12% from last month" },
        MonthlyProgress { label: "Words", value: "5.2K", trend: "+8% from last month" },
        MonthlyProgress { label: "Languages", value: "7", trend: "Same as last month" },
    ]
}
