use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use super::site::BlogPageQuery;
use crate::blog::{self, BlogPage, BlogQuery};
use crate::errors::AppError;
use crate::gallery::{PortfolioItem, PORTFOLIO};
use crate::i18n::{DocumentMeta, Language, Translation};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContentResponse {
    language: Language,
    meta: DocumentMeta,
    translation: &'static Translation,
}

// GET /api/content/:lang
pub async fn content(Path(code): Path<String>) -> Result<Json<ContentResponse>, AppError> {
    let language =
        Language::parse(&code).ok_or_else(|| AppError::NotFound(format!("language '{code}'")))?;
    Ok(Json(ContentResponse {
        language,
        meta: DocumentMeta::for_language(language),
        translation: language.translation(),
    }))
}

// GET /api/portfolio
pub async fn portfolio() -> Json<&'static [PortfolioItem]> {
    Json(&PORTFOLIO[..])
}

// GET /api/blog
pub async fn blog_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BlogPageQuery>,
) -> Json<BlogPage> {
    let language = query
        .lang
        .as_deref()
        .and_then(Language::parse)
        .unwrap_or(state.config.default_language);
    Json(blog::list(
        blog::all_posts(language.translation()),
        &BlogQuery {
            page: query.page,
            category: query.category,
        },
    ))
}
