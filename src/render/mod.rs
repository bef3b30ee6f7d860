//! Server-side HTML for the site pages.
//!
//! Every value that does not come from this module's own literals goes
//! through [`escape`].

pub mod blog;
pub mod lightbox;
pub mod sections;

use crate::html::escape;
use crate::i18n::{DocumentMeta, Language, LanguageContext, PreferenceStore, Translation};
use crate::models::{BookingForm, FieldError};

/// Read-only view of the active language handed to renderers.
pub struct View<'a> {
    pub language: Language,
    pub t: &'static Translation,
    pub meta: &'a DocumentMeta,
}

impl<'a> View<'a> {
    pub fn of<S: PreferenceStore>(ctx: &'a LanguageContext<S>) -> Self {
        Self {
            language: ctx.language(),
            t: ctx.t(),
            meta: ctx.meta(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure { mailto: String },
}

/// State of the booking section: submitted values, inline errors and the
/// notice shown after a submission.
#[derive(Debug, Clone, Default)]
pub struct BookingView {
    pub values: BookingForm,
    pub errors: Vec<FieldError>,
    pub notice: Option<Notice>,
}

fn head(meta: &DocumentMeta) -> String {
    format!(
        r#"<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{og_title}">
<meta property="og:description" content="{og_description}">
<meta property="twitter:title" content="{twitter_title}">
<meta property="twitter:description" content="{twitter_description}">
<link rel="stylesheet" href="/assets/site.css">
</head>"#,
        title = escape(&meta.title),
        description = escape(&meta.description),
        og_title = escape(&meta.og_title),
        og_description = escape(&meta.og_description),
        twitter_title = escape(&meta.twitter_title),
        twitter_description = escape(&meta.twitter_description),
    )
}

fn language_selector(current: Language) -> String {
    let options: String = Language::ALL
        .iter()
        .map(|lang| {
            let class = if *lang == current { "language-option active" } else { "language-option" };
            format!(
                r#"<a class="{class}" href="/language/{code}" hreflang="{code}" title="{name}">{label}</a>"#,
                code = lang.code(),
                name = lang.native_name(),
                label = lang.label(),
            )
        })
        .collect();
    format!(r#"<div class="language-selector">{options}</div>"#)
}

/// Top navigation. Section links are anchors on the home page and absolute
/// links from other pages.
pub fn navigation(view: &View, on_home: bool) -> String {
    let nav = &view.t.nav;
    let prefix = if on_home { "" } else { "/" };
    let links = [
        (nav.home.as_str(), format!("{prefix}#hero")),
        (nav.about.as_str(), format!("{prefix}#about")),
        (nav.portfolio.as_str(), format!("{prefix}#portfolio")),
        (nav.prices.as_str(), format!("{prefix}#prices")),
        (nav.booking.as_str(), format!("{prefix}#booking")),
        (nav.testimonials.as_str(), format!("{prefix}#testimonials")),
        (nav.blog.as_str(), "/blog".to_string()),
        (nav.contact.as_str(), format!("{prefix}#contact")),
    ];
    let items: String = links
        .iter()
        .map(|(label, href)| format!(r#"<li><a href="{href}">{}</a></li>"#, escape(label)))
        .collect();
    format!(
        r#"<nav class="navigation"><a class="brand" href="/">{name}</a><ul>{items}</ul>{selector}</nav>"#,
        name = escape(&view.t.name),
        selector = language_selector(view.language),
    )
}

pub fn layout(view: &View, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n{head}\n<body>\n{body}\n</body>\n</html>\n",
        lang = escape(&view.meta.lang),
        head = head(view.meta),
    )
}

pub fn home_page(view: &View, booking: &BookingView, today: chrono::NaiveDate) -> String {
    let body = [
        navigation(view, true),
        "<main>".to_string(),
        sections::hero(view),
        sections::about(view),
        sections::portfolio(view),
        sections::prices(view),
        sections::booking(view, booking, today),
        sections::testimonials(view),
        sections::blog_teaser(view),
        sections::contact(view),
        "</main>".to_string(),
        sections::footer(view),
    ]
    .join("\n");
    layout(view, &body)
}
