use crate::html::escape;
use crate::models::RelayBooking;

use super::OutgoingEmail;

pub const SUBJECT: &str = "Нове бронювання фотосесії";
const NOT_PROVIDED: &str = "Не вказано";

fn or_not_provided(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_PROVIDED,
    }
}

/// HTML body for the operator's booking notification. All submitted values are escaped.
pub fn booking_html(booking: &RelayBooking) -> String {
    let rows = [
        ("Ім'я", booking.name.as_str()),
        ("Email", booking.email.as_str()),
        ("Телефон", or_not_provided(booking.phone.as_deref())),
        ("Тип сесії", booking.service_type.as_str()),
        ("Дата", booking.date.as_str()),
        ("Час", booking.time.as_str()),
        ("Повідомлення", or_not_provided(booking.message.as_deref())),
    ];

    let mut body = String::new();
    for (label, value) in rows {
        body.push_str(&format!(
            "    <p><strong>{}:</strong> {}</p>\n",
            escape(label),
            escape(value)
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         \x20   <meta charset=\"utf-8\">\n\
         \x20   <title>Нове бронювання сесії</title>\n\
         </head>\n\
         <body>\n\
         \x20   <h2>{SUBJECT}</h2>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

pub fn booking_email(booking: &RelayBooking, from: &str, to: &str) -> OutgoingEmail {
    OutgoingEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: SUBJECT.to_string(),
        html: booking_html(booking),
        reply_to: booking.email.clone(),
    }
}

/// Plain-text summary, used where HTML is not an option (`mailto:` bodies, form collectors).
pub fn booking_text(booking: &RelayBooking) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nService: {}\nDate: {}\nTime: {}\nMessage: {}\n",
        booking.name,
        booking.email,
        or_not_provided(booking.phone.as_deref()),
        booking.service_type,
        booking.date,
        booking.time,
        or_not_provided(booking.message.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> RelayBooking {
        RelayBooking {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
            service_type: "wedding".to_string(),
            date: "2025-07-01".to_string(),
            time: "14:00".to_string(),
            message: Some("".to_string()),
        }
    }

    #[test]
    fn addresses_and_subject() {
        let email = booking_email(&booking(), "from@site.pl", "owner@site.pl");
        assert_eq!(email.from, "from@site.pl");
        assert_eq!(email.to, vec!["owner@site.pl".to_string()]);
        assert_eq!(email.reply_to, "anna@example.com");
        assert_eq!(email.subject, SUBJECT);
    }

    #[test]
    fn lists_fields_with_placeholders() {
        let html = booking_html(&booking());
        assert!(html.contains("<p><strong>Ім&#39;я:</strong> Anna</p>"));
        assert!(html.contains("<p><strong>Тип сесії:</strong> wedding</p>"));
        assert!(html.contains("<p><strong>Телефон:</strong> Не вказано</p>"));
        assert!(html.contains("<p><strong>Повідомлення:</strong> Не вказано</p>"));
    }

    #[test]
    fn submitted_markup_is_escaped() {
        let mut b = booking();
        b.name = "<img src=x onerror=alert(1)>".to_string();
        b.message = Some("Tom & \"Jerry\"".to_string());
        let html = booking_html(&b);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
    }

    #[test]
    fn text_summary() {
        let text = booking_text(&booking());
        assert!(text.contains("Service: wedding"));
        assert!(text.contains("Phone: Не вказано"));
    }
}
