use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;

use super::{Language, Translation};

/// Key under which the visitor's language choice is persisted.
pub const PREFERENCE_KEY: &str = "preferred-language";

/// Key-value persistence for visitor preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

/// Document-level metadata that follows the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub twitter_title: String,
    pub twitter_description: String,
}

impl DocumentMeta {
    pub fn for_language(language: Language) -> Self {
        let meta = &language.translation().meta;
        Self {
            lang: language.code().to_string(),
            title: meta.title.clone(),
            description: meta.description.clone(),
            og_title: meta.title.clone(),
            og_description: meta.description.clone(),
            twitter_title: meta.title.clone(),
            twitter_description: meta.description.clone(),
        }
    }
}

/// Active language for one visitor.
///
/// Renderers only read through [`LanguageContext::t`] and
/// [`LanguageContext::meta`]; [`LanguageContext::set_language`] is the only
/// way to change what they see.
pub struct LanguageContext<S: PreferenceStore> {
    language: Language,
    meta: DocumentMeta,
    store: S,
}

impl<S: PreferenceStore> LanguageContext<S> {
    /// Restore the saved language from `store`, falling back to `default`
    /// when nothing (or an unknown code) was saved.
    pub fn load(store: S, default: Language) -> Self {
        let language = store
            .get(PREFERENCE_KEY)
            .and_then(|code| Language::parse(&code))
            .unwrap_or(default);
        let mut ctx = Self {
            language,
            meta: DocumentMeta::for_language(language),
            store,
        };
        ctx.set_language(language);
        ctx
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self) -> &'static Translation {
        self.language.translation()
    }

    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.store.set(PREFERENCE_KEY, language.code());
        self.meta = DocumentMeta::for_language(language);
        tracing::debug!(lang = language.code(), "language applied");
    }
}
