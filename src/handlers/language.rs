use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::header::{COOKIE, HOST, REFERER, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

use crate::errors::AppError;
use crate::i18n::{Language, LanguageContext, PreferenceStore, PREFERENCE_KEY};
use crate::state::AppState;

const COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

/// Preferences carried in request cookies. Values set during the request are
/// written back with [`CookiePreferences::set_cookie`].
#[derive(Debug, Default)]
pub struct CookiePreferences {
    incoming: HashMap<String, String>,
    changed: Mutex<HashMap<String, String>>,
}

impl CookiePreferences {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let incoming = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                Some((name.trim().to_string(), value.trim().to_string()))
            })
            .collect();
        Self {
            incoming,
            changed: Mutex::new(HashMap::new()),
        }
    }

    /// `Set-Cookie` value for `key` when the request changed it.
    pub fn set_cookie(&self, key: &str) -> Option<HeaderValue> {
        let changed = self.changed.lock().ok()?;
        cookie(key, changed.get(key)?)
    }
}

fn cookie(key: &str, value: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("{key}={value}; Max-Age={COOKIE_MAX_AGE}; Path=/; SameSite=Lax")).ok()
}

impl PreferenceStore for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.changed.lock().ok()?.get(key) {
            return Some(value.clone());
        }
        self.incoming.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let Ok(mut changed) = self.changed.lock() else {
            return;
        };
        if self.incoming.get(key).map(String::as_str) == Some(value) {
            changed.remove(key);
        } else {
            changed.insert(key.to_string(), value.to_string());
        }
    }
}

/// Language for a page request: `?lang=` first, then the cookie, then the
/// configured default. An unknown `?lang=` is ignored.
pub fn resolve(
    headers: &HeaderMap,
    lang: Option<&str>,
    default: Language,
) -> LanguageContext<CookiePreferences> {
    let mut ctx = LanguageContext::load(CookiePreferences::from_headers(headers), default);
    if let Some(language) = lang.and_then(Language::parse) {
        ctx.set_language(language);
    }
    ctx
}

/// Attach the language cookie to `response` if the request changed it.
pub fn with_preference(ctx: &LanguageContext<CookiePreferences>, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Some(cookie) = ctx.store().set_cookie(PREFERENCE_KEY) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}

/// Path and query of `referer` when it points back at `host`.
fn same_site_target(referer: &str, host: Option<&str>) -> Option<String> {
    let url = reqwest::Url::parse(referer).ok()?;
    let authority = match (url.host_str(), url.port()) {
        (Some(h), Some(port)) => format!("{h}:{port}"),
        (Some(h), None) => h.to_string(),
        (None, _) => return None,
    };
    if !host?.eq_ignore_ascii_case(&authority) || url.path().starts_with("//") {
        return None;
    }
    Some(match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    })
}

// GET /language/:code
pub async fn switch_language(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let language =
        Language::parse(&code).ok_or_else(|| AppError::NotFound(format!("language '{code}'")))?;

    let mut ctx = LanguageContext::load(
        CookiePreferences::from_headers(&headers),
        state.config.default_language,
    );
    ctx.set_language(language);
    tracing::info!(lang = language.code(), "language switched");

    let host = headers.get(HOST).and_then(|v| v.to_str().ok());
    let back = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|referer| same_site_target(referer, host))
        .unwrap_or_else(|| "/".to_string());

    // Always write the cookie here, even when it already matched.
    let mut response = Redirect::to(&back).into_response();
    if let Some(cookie) = cookie(PREFERENCE_KEY, ctx.language().code()) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn reads_cookie_among_others() {
        let store = CookiePreferences::from_headers(&headers("theme=dark; preferred-language=pl"));
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("pl"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn only_changes_are_written_back() {
        let store = CookiePreferences::from_headers(&headers("preferred-language=uk"));
        store.set(PREFERENCE_KEY, "uk");
        assert!(store.set_cookie(PREFERENCE_KEY).is_none());

        store.set(PREFERENCE_KEY, "en");
        let cookie = store.set_cookie(PREFERENCE_KEY).unwrap();
        assert_eq!(
            cookie.to_str().unwrap(),
            "preferred-language=en; Max-Age=31536000; Path=/; SameSite=Lax"
        );
    }

    #[test]
    fn redirects_only_back_to_this_site() {
        let host = Some("localhost:3000");
        assert_eq!(
            same_site_target("http://localhost:3000/blog?page=2", host).as_deref(),
            Some("/blog?page=2")
        );
        assert_eq!(same_site_target("https://evil.example/phish", host), None);
        assert_eq!(same_site_target("http://localhost:3000//evil.example", host), None);
        assert_eq!(same_site_target("http://localhost:3000/blog", None), None);
        assert_eq!(same_site_target("not a url", host), None);
    }

    #[test]
    fn query_overrides_cookie() {
        let ctx = resolve(&headers("preferred-language=pl"), Some("uk"), Language::En);
        assert_eq!(ctx.language(), Language::Uk);

        let ctx = resolve(&headers("preferred-language=pl"), Some("de"), Language::En);
        assert_eq!(ctx.language(), Language::Pl);

        let ctx = resolve(&HeaderMap::new(), None, Language::Uk);
        assert_eq!(ctx.language(), Language::Uk);
    }
}
