//! Localized site content.
//!
//! Three complete translation records (`en`, `uk`, `pl`) are embedded from
//! `locales/` at compile time and parsed once on first use. The active
//! language for a visitor is held by [`LanguageContext`].

pub mod context;
pub mod translation;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use context::{DocumentMeta, LanguageContext, MemoryPreferences, PreferenceStore, PREFERENCE_KEY};
pub use translation::Translation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
    Pl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Uk, Language::Pl];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uk => "uk",
            Language::Pl => "pl",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "uk" => Some(Language::Uk),
            "pl" => Some(Language::Pl),
            _ => None,
        }
    }

    /// Short label shown in the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Uk => "UA",
            Language::Pl => "PL",
        }
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Uk => "Українська",
            Language::Pl => "Polski",
        }
    }

    pub fn translation(&self) -> &'static Translation {
        match self {
            Language::En => &TRANSLATIONS.en,
            Language::Uk => &TRANSLATIONS.uk,
            Language::Pl => &TRANSLATIONS.pl,
        }
    }
}

struct Records {
    en: Translation,
    uk: Translation,
    pl: Translation,
}

fn parse_record(code: &str, raw: &str) -> Translation {
    // The records are compiled into the binary; a parse failure is a build defect
    // caught by `all_records_parse` below.
    serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("embedded translation record `{code}` is invalid: {e}"))
}

static TRANSLATIONS: Lazy<Records> = Lazy::new(|| Records {
    en: parse_record("en", include_str!("../../locales/en.json")),
    uk: parse_record("uk", include_str!("../../locales/uk.json")),
    pl: parse_record("pl", include_str!("../../locales/pl.json")),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_records_parse() {
        for lang in Language::ALL {
            let t = lang.translation();
            assert!(!t.meta.title.is_empty(), "{} has empty meta title", lang.code());
            assert_eq!(t.blog.posts.len(), 3, "{} featured posts", lang.code());
            assert!(!t.testimonials.items.is_empty());
        }
    }

    #[test]
    fn records_are_distinct() {
        assert_ne!(Language::En.translation().meta.title, Language::Uk.translation().meta.title);
        assert_ne!(Language::Uk.translation().nav.home, Language::Pl.translation().nav.home);
    }

    #[test]
    fn parse_codes() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse(" UK "), Some(Language::Uk));
        assert_eq!(Language::parse("pl"), Some(Language::Pl));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn missing_key_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../../locales/en.json")).unwrap();
        value["hero"].as_object_mut().unwrap().remove("cta");
        assert!(serde_json::from_value::<Translation>(value).is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../../locales/en.json")).unwrap();
        value["nav"]["shop"] = serde_json::json!("Shop");
        assert!(serde_json::from_value::<Translation>(value).is_err());
    }
}
