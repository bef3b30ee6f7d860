use std::env;

use crate::i18n::Language;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub resend_api_key: String,
    pub resend_api_url: String,
    pub booking_from: String,
    pub booking_to: String,
    pub web3forms_access_key: String,
    pub web3forms_url: String,
    pub google_form_url: String,
    /// `field=entryid` pairs, e.g. `name=123,email=456`.
    pub google_form_entries: Vec<(String, String)>,
    pub default_language: Language,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            resend_api_key: env::var("RESEND_API_KEY").unwrap_or_default(),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            booking_from: env::var("BOOKING_FROM")
                .unwrap_or_else(|_| "bookings@vitahushelphoto.com".to_string()),
            booking_to: env::var("BOOKING_TO")
                .unwrap_or_else(|_| "vitahushelphoto@gmail.com".to_string()),
            web3forms_access_key: env::var("WEB3FORMS_ACCESS_KEY").unwrap_or_default(),
            web3forms_url: env::var("WEB3FORMS_URL")
                .unwrap_or_else(|_| "https://api.web3forms.com/submit".to_string()),
            google_form_url: env::var("GOOGLE_FORM_URL").unwrap_or_default(),
            google_form_entries: parse_entries(
                &env::var("GOOGLE_FORM_ENTRIES").unwrap_or_default(),
            ),
            default_language: env::var("DEFAULT_LANGUAGE")
                .ok()
                .and_then(|v| Language::parse(&v))
                .unwrap_or_default(),
        }
    }
}

pub fn parse_entries(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|pair| {
            let (field, entry) = pair.split_once('=')?;
            let (field, entry) = (field.trim(), entry.trim());
            if field.is_empty() || entry.is_empty() {
                tracing::warn!(pair, "ignoring malformed GOOGLE_FORM_ENTRIES pair");
                return None;
            }
            Some((field.to_string(), entry.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entry_pairs() {
        let entries = parse_entries("name=111, email = 222,broken,=9");
        assert_eq!(
            entries,
            vec![
                ("name".to_string(), "111".to_string()),
                ("email".to_string(), "222".to_string()),
            ]
        );
    }

    #[test]
    fn empty_entries() {
        assert!(parse_entries("").is_empty());
    }
}
