use chrono::NaiveDate;

use super::{BookingView, Notice, View};
use crate::blog;
use crate::gallery::PORTFOLIO;
use crate::html::escape;
use crate::i18n::translation::Package;
use crate::models::{BookingForm, Field, ServiceType, TimeSlot};

const PHONE_DISPLAY: &str = "+48 791 613 941";
const PHONE_HREF: &str = "tel:+48791613941";
const EMAIL: &str = "vitahushel@gmail.com";
const WHATSAPP_HREF: &str = "https://wa.me/48791613941";
const TELEGRAM_HREF: &str = "https://t.me/vitahushel";
const INSTAGRAM_HREF: &str = "https://instagram.com/vitahushel";
const MAPS_HREF: &str = "https://maps.google.com/?q=Wolsztyn,+64-200,+Poland";

fn heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="section-heading"><h2>{}</h2><p>{}</p></header>"#,
        escape(title),
        escape(subtitle)
    )
}

pub fn hero(view: &View) -> String {
    let hero = &view.t.hero;
    format!(
        r##"<section id="hero" class="hero">
<h1>{}</h1>
<p class="hero-subtitle">{}</p>
<a class="button primary" href="#booking">{}</a>
</section>"##,
        escape(&hero.title),
        escape(&hero.subtitle),
        escape(&hero.cta),
    )
}

pub fn about(view: &View) -> String {
    let about = &view.t.about;
    format!(
        r#"<section id="about" class="about fade-in">
<h2>{}</h2>
<img src="/assets/about/portrait.jpg" alt="{}" loading="lazy">
<p>{}</p>
</section>"#,
        escape(&about.title),
        escape(&view.t.name),
        escape(&about.content),
    )
}

pub fn portfolio(view: &View) -> String {
    let p = &view.t.portfolio;
    let items: String = PORTFOLIO
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                r#"<li class="portfolio-item"><a href="/portfolio/{index}?lang={lang}"><img src="{src}" alt="{alt}" loading="lazy"><span class="category">{category}</span><span class="caption">{caption}</span></a></li>"#,
                lang = view.language.code(),
                src = escape(item.src),
                alt = escape(item.alt),
                category = escape(item.category),
                caption = escape(item.caption),
            )
        })
        .collect();
    format!(
        r#"<section id="portfolio" class="portfolio fade-in">
{}
<ul class="portfolio-grid">{items}</ul>
</section>"#,
        heading(&p.title, &p.subtitle)
    )
}

fn package_card(key: &str, package: &Package, popular: bool, view: &View) -> String {
    let prices = &view.t.prices;
    let badge = if popular {
        format!(r#"<span class="badge">{}</span>"#, escape(&prices.most_popular))
    } else {
        String::new()
    };
    let features: String = package
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape(f)))
        .collect();
    format!(
        r##"<article class="package{popular_class}" data-package="{key}">{badge}<h3>{title}</h3><p class="price">{price}</p><p class="description">{description}</p><ul>{features}</ul><a class="button" href="#booking">{book}</a></article>"##,
        popular_class = if popular { " popular" } else { "" },
        title = escape(&package.title),
        price = escape(&package.price),
        description = escape(&package.description),
        book = escape(&prices.book_now),
    )
}

pub fn prices(view: &View) -> String {
    let prices = &view.t.prices;
    let packages = &prices.packages;
    let cards = [
        ("portrait", &packages.portrait, false),
        ("family", &packages.family, true),
        ("children", &packages.children, false),
        ("wedding", &packages.wedding, false),
        ("event", &packages.event, false),
        ("studio", &packages.studio, false),
    ]
    .iter()
    .map(|(key, package, popular)| package_card(key, package, *popular, view))
    .collect::<String>();
    format!(
        r#"<section id="prices" class="prices fade-in">
{}
<div class="packages">{cards}</div>
<aside class="additional-info"><p>{}</p><p>{}</p></aside>
</section>"#,
        heading(&prices.title, &prices.subtitle),
        escape(&prices.additional_info.delivery),
        escape(&prices.additional_info.originals),
    )
}

fn field_error(view: &View, booking: &BookingView, field: Field) -> String {
    BookingForm::error_for(&booking.errors, field)
        .map(|e| {
            format!(
                r#"<p class="field-error" role="alert">{}</p>"#,
                escape(e.message(&view.t.booking.form.validation))
            )
        })
        .unwrap_or_default()
}

fn selected(current: &str, value: &str) -> &'static str {
    if current == value {
        " selected"
    } else {
        ""
    }
}

fn notice(view: &View, notice: &Notice) -> String {
    let n = &view.t.booking.notices;
    match notice {
        Notice::Success => format!(
            r#"<div class="notice success" role="status"><strong>{}</strong><p>{}</p></div>"#,
            escape(&n.success_title),
            escape(&n.success)
        ),
        Notice::Failure { mailto } => format!(
            r#"<div class="notice failure" role="alert"><strong>{}</strong><p>{}</p><a class="button" href="{}">{}</a></div>"#,
            escape(&n.failure_title),
            escape(&n.failure),
            escape(mailto),
            escape(&n.mailto)
        ),
    }
}

pub fn booking(view: &View, booking: &BookingView, today: NaiveDate) -> String {
    let b = &view.t.booking;
    let form = &b.form;
    let values = &booking.values;

    let service_options: String = ServiceType::ALL
        .iter()
        .map(|service| {
            format!(
                r#"<option value="{value}"{sel}>{label}</option>"#,
                value = service.as_str(),
                sel = selected(values.service_type.trim(), service.as_str()),
                label = escape(service.label(&form.services)),
            )
        })
        .collect();

    let time_options: String = TimeSlot::all()
        .map(|slot| {
            let slot = slot.to_string();
            format!(
                r#"<option value="{slot}"{sel}>{slot}</option>"#,
                sel = selected(values.time.trim(), &slot),
            )
        })
        .collect();

    let notice_html = booking
        .notice
        .as_ref()
        .map(|n| notice(view, n))
        .unwrap_or_default();

    format!(
        r#"<section id="booking" class="booking fade-in">
{heading}
{notice_html}
<form method="post" action="/booking?lang={lang}" novalidate>
<input type="text" name="honeypot" value="" tabindex="-1" autocomplete="off" style="display:none" aria-hidden="true">
<div class="field"><label for="name">{name_label} *</label><input id="name" name="name" type="text" value="{name}" placeholder="{name_ph}" required minlength="2">{name_err}</div>
<div class="field"><label for="email">{email_label} *</label><input id="email" name="email" type="email" value="{email}" placeholder="{email_ph}" required>{email_err}</div>
<div class="field"><label for="phone">{phone_label}</label><input id="phone" name="phone" type="tel" value="{phone}" placeholder="{phone_ph}"></div>
<div class="field"><label for="serviceType">{service_label} *</label><select id="serviceType" name="serviceType" required><option value="">{service_ph}</option>{service_options}</select>{service_err}</div>
<div class="field"><label for="date">{date_label} *</label><input id="date" name="date" type="date" value="{date}" min="{min_date}" required>{date_err}</div>
<div class="field"><label for="time">{time_label} *</label><select id="time" name="time" required><option value="">{time_ph}</option>{time_options}</select>{time_err}</div>
<div class="field"><label for="message">{message_label}</label><textarea id="message" name="message" rows="4" placeholder="{message_ph}">{message}</textarea></div>
<button type="submit" class="button primary">{submit}</button>
<p class="agreement">{agreement}</p>
</form>
</section>"#,
        heading = heading(&b.title, &b.subtitle),
        lang = view.language.code(),
        name_label = escape(&form.name),
        name = escape(&values.name),
        name_ph = escape(&form.name_placeholder),
        name_err = field_error(view, booking, Field::Name),
        email_label = escape(&form.email),
        email = escape(&values.email),
        email_ph = escape(&form.email_placeholder),
        email_err = field_error(view, booking, Field::Email),
        phone_label = escape(&form.phone),
        phone = escape(&values.phone),
        phone_ph = escape(&form.phone_placeholder),
        service_label = escape(&form.service_type),
        service_ph = escape(&form.service_placeholder),
        service_err = field_error(view, booking, Field::ServiceType),
        date_label = escape(&form.date),
        date = escape(&values.date),
        min_date = today.format("%Y-%m-%d"),
        date_err = field_error(view, booking, Field::Date),
        time_label = escape(&form.time),
        time_ph = escape(&form.time_placeholder),
        time_err = field_error(view, booking, Field::Time),
        message_label = escape(&form.message),
        message_ph = escape(&form.message_placeholder),
        message = escape(&values.message),
        submit = escape(&form.submit),
        agreement = escape(&form.agreement),
    )
}

pub fn testimonials(view: &View) -> String {
    let t = &view.t.testimonials;
    let items: String = t
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<blockquote class="testimonial"><p>{}</p><footer><cite>{}</cite><span class="role">{}</span></footer></blockquote>"#,
                escape(&item.content),
                escape(&item.name),
                escape(&item.role),
            )
        })
        .collect();
    format!(
        r#"<section id="testimonials" class="testimonials fade-in">
{}
<div class="testimonial-list">{items}</div>
</section>"#,
        heading(&t.title, &t.subtitle)
    )
}

pub fn post_card(view: &View, post: &blog::BlogPost) -> String {
    let tags: String = post
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
        .collect();
    format!(
        r#"<article class="post-card"><img src="{image}" alt="{title}" loading="lazy"><div class="post-meta"><span class="category">{category}</span><time>{date}</time></div><h3>{title}</h3><p>{excerpt}</p><div class="tags">{tags}</div><a href="{url}">{read_more}</a></article>"#,
        image = escape(post.image),
        title = escape(&post.title),
        category = escape(&post.category),
        date = escape(&post.date),
        excerpt = escape(&post.excerpt),
        url = escape(&post.url()),
        read_more = escape(&view.t.blog.read_more),
    )
}

pub fn blog_teaser(view: &View) -> String {
    let b = &view.t.blog;
    let cards: String = blog::teaser(view.t)
        .iter()
        .map(|post| post_card(view, post))
        .collect();
    format!(
        r#"<section id="blog" class="blog-teaser fade-in">
{}
<div class="post-grid">{cards}</div>
<a class="button" href="/blog?lang={}">{}</a>
</section>"#,
        heading(&b.title, &b.subtitle),
        view.language.code(),
        escape(&b.view_all_posts),
    )
}

pub fn contact(view: &View) -> String {
    let c = &view.t.contact;
    format!(
        r#"<section id="contact" class="contact fade-in">
{heading}
<address>
<p class="location"><a href="{maps}" target="_blank" rel="noopener">{address}</a></p>
<ul class="contact-methods">
<li><span>{phone_label}</span> <a href="{phone_href}">{phone}</a></li>
<li><span>{email_label}</span> <a href="mailto:{email}">{email}</a></li>
<li><a href="{whatsapp_href}" target="_blank" rel="noopener">{whatsapp}</a></li>
<li><a href="{telegram_href}" target="_blank" rel="noopener">{telegram}</a></li>
<li><a href="{instagram_href}" target="_blank" rel="noopener">{instagram}</a></li>
</ul>
</address>
<dl class="working-hours">
<dt>Mon–Fri / Пн–Пт / Pon–Pt</dt><dd>10:00–18:00</dd>
<dt>Sat–Sun / Сб–Нд / Sob–Nd</dt><dd>by appointment / за попереднім записом / po wcześniejszym umówieniu</dd>
</dl>
</section>"#,
        heading = heading(&c.title, &c.subtitle),
        maps = MAPS_HREF,
        address = escape(&c.address),
        phone_label = escape(&c.phone),
        phone_href = PHONE_HREF,
        phone = PHONE_DISPLAY,
        email_label = escape(&c.email),
        email = EMAIL,
        whatsapp_href = WHATSAPP_HREF,
        whatsapp = escape(&c.social.whatsapp),
        telegram_href = TELEGRAM_HREF,
        telegram = escape(&c.social.telegram),
        instagram_href = INSTAGRAM_HREF,
        instagram = escape(&c.social.instagram),
    )
}

pub fn footer(view: &View) -> String {
    let nav = &view.t.nav;
    let links: String = [
        (nav.home.as_str(), "hero"),
        (nav.about.as_str(), "about"),
        (nav.portfolio.as_str(), "portfolio"),
        (nav.prices.as_str(), "prices"),
        (nav.booking.as_str(), "booking"),
        (nav.testimonials.as_str(), "testimonials"),
        (nav.contact.as_str(), "contact"),
    ]
    .iter()
    .map(|(label, anchor)| format!(r##"<li><a href="/#{anchor}">{}</a></li>"##, escape(label)))
    .collect();
    format!(
        r##"<footer class="site-footer">
<ul class="quick-links">{links}</ul>
<p class="copyright">{}</p>
<a class="back-to-top" href="#hero">{}</a>
</footer>"##,
        escape(&view.t.footer.copyright),
        escape(&view.t.footer.back_to_top),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentMeta, Language};
    use crate::models::{ErrorKind, FieldError};

    fn with_view<R>(lang: Language, f: impl FnOnce(&View) -> R) -> R {
        let meta = DocumentMeta::for_language(lang);
        let view = View {
            language: lang,
            t: lang.translation(),
            meta: &meta,
        };
        f(&view)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn booking_form_lists_fixed_options() {
        let html = with_view(Language::En, |v| booking(v, &BookingView::default(), today()));
        for service in ServiceType::ALL {
            assert!(html.contains(&format!(r#"<option value="{}">"#, service.as_str())));
        }
        assert!(html.contains(r#"<option value="09:00">09:00</option>"#));
        assert!(html.contains(r#"<option value="19:00">19:00</option>"#));
        assert!(html.contains(r#"min="2025-05-01""#));
        assert!(html.contains(r#"name="honeypot""#));
    }

    #[test]
    fn booking_form_shows_errors_and_keeps_values() {
        let view_state = BookingView {
            values: BookingForm {
                name: "<b>Ann</b>".to_string(),
                service_type: "wedding".to_string(),
                time: "12:00".to_string(),
                ..BookingForm::default()
            },
            errors: vec![FieldError {
                field: Field::Email,
                kind: ErrorKind::InvalidEmail,
            }],
            notice: None,
        };
        let html = with_view(Language::Pl, |v| booking(v, &view_state, today()));
        assert!(html.contains(r#"value="&lt;b&gt;Ann&lt;/b&gt;""#));
        assert!(html.contains(r#"<option value="wedding" selected>"#));
        assert!(html.contains(r#"<option value="12:00" selected>12:00</option>"#));
        assert!(html.contains("Proszę podać prawidłowy adres e-mail"));
    }

    #[test]
    fn failure_notice_links_mailto() {
        let view_state = BookingView {
            notice: Some(Notice::Failure {
                mailto: "mailto:owner@example.com?subject=x&body=y".to_string(),
            }),
            ..BookingView::default()
        };
        let html = with_view(Language::En, |v| booking(v, &view_state, today()));
        assert!(html.contains(r#"href="mailto:owner@example.com?subject=x&amp;body=y""#));
        assert!(html.contains("Send by email instead"));
    }

    #[test]
    fn family_package_is_most_popular() {
        let html = with_view(Language::En, prices);
        assert!(html.contains(r#"<article class="package popular" data-package="family"><span class="badge">Most Popular</span>"#));
        assert_eq!(html.matches("<article class=\"package").count(), 6);
    }

    #[test]
    fn portfolio_links_into_lightbox() {
        let html = with_view(Language::Uk, portfolio);
        assert!(html.contains(r#"href="/portfolio/0?lang=uk""#));
        assert!(html.contains(r#"href="/portfolio/5?lang=uk""#));
    }

    #[test]
    fn teaser_links_to_blog_listing() {
        let html = with_view(Language::En, blog_teaser);
        assert_eq!(html.matches("<article class=\"post-card\">").count(), 3);
        assert!(html.contains(r#"href="/blog?lang=en""#));
    }
}
