use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, Redirect, Response};
use serde::Deserialize;

use super::language::{resolve, with_preference};
use crate::blog::{self, BlogQuery};
use crate::errors::AppError;
use crate::gallery::{Key, Lightbox, LightboxState, PORTFOLIO};
use crate::render::{self, BookingView, View};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

// GET /
pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let ctx = resolve(&headers, query.lang.as_deref(), state.config.default_language);
    let today = chrono::Local::now().date_naive();
    let html = render::home_page(&View::of(&ctx), &BookingView::default(), today);
    with_preference(&ctx, Html(html))
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogPageQuery {
    pub lang: Option<String>,
    pub page: Option<usize>,
    pub category: Option<String>,
}

// GET /blog
pub async fn blog_listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BlogPageQuery>,
    headers: HeaderMap,
) -> Response {
    let ctx = resolve(&headers, query.lang.as_deref(), state.config.default_language);
    let page = blog::list(
        blog::all_posts(ctx.t()),
        &BlogQuery {
            page: query.page,
            category: query.category,
        },
    );
    let html = render::blog::blog_page(&View::of(&ctx), &page);
    with_preference(&ctx, Html(html))
}

#[derive(Debug, Default, Deserialize)]
pub struct LightboxQuery {
    pub lang: Option<String>,
    /// DOM key name forwarded by the page script.
    pub key: Option<String>,
}

// GET /portfolio/:index
pub async fn lightbox(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Query(query): Query<LightboxQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let ctx = resolve(&headers, query.lang.as_deref(), state.config.default_language);
    let lang = ctx.language().code();

    let mut lightbox = Lightbox::new(&PORTFOLIO);
    lightbox
        .open(index)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    if let Some(key) = query.key.as_deref() {
        lightbox.handle_key(Key::from_dom(key));
        let target = match lightbox.state() {
            LightboxState::Open(i) if i == index => None,
            LightboxState::Open(i) => Some(format!("/portfolio/{i}?lang={lang}")),
            LightboxState::Closed => Some(format!("/?lang={lang}#portfolio")),
        };
        if let Some(target) = target {
            return Ok(with_preference(&ctx, Redirect::to(&target)));
        }
    }

    let html = render::lightbox::lightbox_page(&View::of(&ctx), &lightbox);
    Ok(with_preference(&ctx, Html(html)))
}
