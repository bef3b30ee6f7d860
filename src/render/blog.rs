use super::sections::{footer, post_card};
use super::{layout, navigation, View};
use crate::blog::BlogPage;
use crate::html::{escape, percent_encode};

fn listing_href(view: &View, category: Option<&str>, page: Option<usize>) -> String {
    let mut href = format!("/blog?lang={}", view.language.code());
    if let Some(category) = category {
        href.push_str("&category=");
        href.push_str(&percent_encode(category));
    }
    if let Some(page) = page {
        href.push_str(&format!("&page={page}"));
    }
    href
}

fn filters(view: &View, page: &BlogPage) -> String {
    let b = &view.t.blog;
    let selected = page.selected_category.as_deref();
    let all_class = if selected.is_none() { "filter active" } else { "filter" };
    // Category links carry no page number, so switching category starts at page one.
    let buttons: String = page
        .categories
        .iter()
        .map(|category| {
            let class = if selected == Some(category.as_str()) { "filter active" } else { "filter" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                listing_href(view, Some(category), None),
                escape(category)
            )
        })
        .collect();
    format!(
        r#"<nav class="blog-filters"><span>{}</span><a class="{all_class}" href="{}">{}</a>{buttons}</nav>"#,
        escape(&b.filter_by),
        listing_href(view, None, None),
        escape(&b.all_posts),
    )
}

fn pagination(view: &View, page: &BlogPage) -> String {
    if page.total_pages <= 1 {
        return String::new();
    }
    let b = &view.t.blog;
    let category = page.selected_category.as_deref();

    let previous = if page.has_previous() {
        format!(
            r#"<a class="page-prev" href="{}">{}</a>"#,
            listing_href(view, category, Some(page.page - 1)),
            escape(&b.previous)
        )
    } else {
        format!(r#"<span class="page-prev disabled">{}</span>"#, escape(&b.previous))
    };
    let next = if page.has_next() {
        format!(
            r#"<a class="page-next" href="{}">{}</a>"#,
            listing_href(view, category, Some(page.page + 1)),
            escape(&b.next)
        )
    } else {
        format!(r#"<span class="page-next disabled">{}</span>"#, escape(&b.next))
    };
    let numbers: String = (1..=page.total_pages)
        .map(|n| {
            if n == page.page {
                format!(r#"<span class="page current" aria-current="page">{n}</span>"#)
            } else {
                format!(r#"<a class="page" href="{}">{n}</a>"#, listing_href(view, category, Some(n)))
            }
        })
        .collect();

    format!(r#"<nav class="pagination">{previous}<div class="pages">{numbers}</div>{next}</nav>"#)
}

pub fn blog_page(view: &View, page: &BlogPage) -> String {
    let b = &view.t.blog;
    let cards: String = page.posts.iter().map(|post| post_card(view, post)).collect();
    let body = format!(
        r#"{nav}
<main class="blog">
<section class="blog-hero">
<nav class="breadcrumbs"><a href="/?lang={lang}">{home}</a> › <a href="/blog?lang={lang}">{title}</a></nav>
<h1>{title}</h1>
<p>{subtitle}</p>
</section>
{filters}
<section class="post-grid">{cards}</section>
{pagination}
</main>
{footer}"#,
        nav = navigation(view, false),
        lang = view.language.code(),
        home = escape(&view.t.nav.home),
        title = escape(&b.title),
        subtitle = escape(&b.subtitle),
        filters = filters(view, page),
        pagination = pagination(view, page),
        footer = footer(view),
    );
    layout(view, &body)
}
