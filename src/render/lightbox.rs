use super::{layout, View};
use crate::gallery::{Lightbox, PortfolioItem};
use crate::html::escape;

// Arrow keys and Escape are sent back to the server, which owns the state.
const KEY_SCRIPT: &str = r#"<script>
document.addEventListener('keydown', function (e) {
  if (e.key === 'ArrowLeft' || e.key === 'ArrowRight' || e.key === 'Escape') {
    var url = new URL(window.location.href);
    url.searchParams.set('key', e.key);
    window.location.assign(url.toString());
  }
});
</script>"#;

/// Full-screen view of the open image. Renders the closed overlay as an empty
/// string so callers can redirect instead.
pub fn lightbox_page(view: &View, lightbox: &Lightbox<PortfolioItem>) -> String {
    let (Some(item), Some(prev), Some(next)) = (lightbox.current(), lightbox.peek_prev(), lightbox.peek_next())
    else {
        return String::new();
    };
    let lang = view.language.code();
    let body = format!(
        r##"<div class="lightbox" role="dialog" aria-modal="true">
<a class="lightbox-close" href="/?lang={lang}#portfolio" aria-label="Close">&times;</a>
<a class="lightbox-prev" href="/portfolio/{prev}?lang={lang}" aria-label="Previous">&lsaquo;</a>
<figure>
<img src="{src}" alt="{alt}">
<figcaption><span class="category">{category}</span> {caption}</figcaption>
</figure>
<a class="lightbox-next" href="/portfolio/{next}?lang={lang}" aria-label="Next">&rsaquo;</a>
</div>
{KEY_SCRIPT}"##,
        src = escape(item.src),
        alt = escape(item.alt),
        category = escape(item.category),
        caption = escape(item.caption),
    );
    layout(view, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PORTFOLIO;
    use crate::i18n::{DocumentMeta, Language};

    fn render(lightbox: &Lightbox<PortfolioItem>) -> String {
        let meta = DocumentMeta::for_language(Language::Pl);
        let view = View {
            language: Language::Pl,
            t: Language::Pl.translation(),
            meta: &meta,
        };
        lightbox_page(&view, lightbox)
    }

    #[test]
    fn neighbours_wrap_around() {
        let mut lightbox = Lightbox::new(&PORTFOLIO);
        lightbox.open(0).unwrap();
        let html = render(&lightbox);
        assert!(html.contains(r#"href="/portfolio/5?lang=pl" aria-label="Previous""#));
        assert!(html.contains(r#"href="/portfolio/1?lang=pl" aria-label="Next""#));
        assert!(html.contains(r##"href="/?lang=pl#portfolio""##));
        assert!(html.contains(r#"src="/assets/portfolio/wedding-1.jpg""#));
        assert!(html.contains("Sarah &amp; Michael - Garden Wedding"));
    }

    #[test]
    fn closed_renders_nothing() {
        let lightbox = Lightbox::new(&PORTFOLIO);
        assert!(render(&lightbox).is_empty());
    }
}
