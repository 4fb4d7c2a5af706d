use serde::{Deserialize, Serialize};

use crate::utils::storage::PreferenceStore;

/// Languages the page ships text for. Arabic is the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code.trim())
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Arabic => Direction::Rtl,
            Language::English => Direction::Ltr,
        }
    }

    /// Label shown on the toggle button while this language is active.
    pub fn short_label(self) -> &'static str {
        match self {
            Language::Arabic => "ع",
            Language::English => "EN",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }

    /// Attribute holding this language's text on translatable elements.
    pub fn attribute(self) -> String {
        format!("data-{}", self.code())
    }
}

/// Selector matching every element that carries text for all languages.
pub fn translatable_selector() -> String {
    Language::ALL
        .iter()
        .map(|lang| format!("[{}]", lang.attribute()))
        .collect()
}

/// Text of one element in both languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    pub arabic: String,
    pub english: String,
}

impl TextPair {
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.arabic,
            Language::English => &self.english,
        }
    }
}

/// Everything the page shows that depends on the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageView {
    pub lang: &'static str,
    pub dir: &'static str,
    /// The toggle advertises the language it switches to.
    pub toggle_label: &'static str,
}

impl LanguageView {
    pub fn for_language(language: Language) -> Self {
        Self {
            lang: language.code(),
            dir: language.direction().as_str(),
            toggle_label: language.other().short_label(),
        }
    }
}

/// Loads the stored preference. Unknown or missing codes yield `fallback`.
pub fn load_preference(store: &dyn PreferenceStore, key: &str, fallback: Language) -> Language {
    match store.load(key) {
        Some(code) => Language::from_code(&code).unwrap_or_else(|| {
            log::warn!("Ignoring unknown stored language {:?}", code);
            fallback
        }),
        None => fallback,
    }
}

pub fn save_preference(store: &dyn PreferenceStore, key: &str, language: Language) {
    if let Err(e) = store.save(key, language.code()) {
        log::warn!("Failed to persist language preference: {}", e);
    }
}
