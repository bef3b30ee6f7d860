use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, Redirect, Response};
use axum::Form;

use super::language::{resolve, with_preference};
use super::site::PageQuery;
use crate::models::BookingForm;
use crate::render::{self, BookingView, Notice, View};
use crate::services::delivery::DeliveryOutcome;
use crate::state::AppState;

fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
}

// POST /booking
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
    Form(form): Form<BookingForm>,
) -> Response {
    let ctx = resolve(&headers, query.lang.as_deref(), state.config.default_language);
    let view = View::of(&ctx);
    let submission = uuid::Uuid::new_v4();

    if form.is_spam() {
        tracing::debug!(%submission, "honeypot filled, dropping booking");
        let target = format!("/?lang={}#booking", ctx.language().code());
        return with_preference(&ctx, Redirect::to(&target));
    }

    let today = chrono::Local::now().date_naive();
    let request = match form.validate(today) {
        Ok(request) => request,
        Err(errors) => {
            tracing::info!(%submission, errors = errors.len(), "booking rejected by validation");
            let booking = BookingView {
                values: form,
                errors,
                notice: None,
            };
            let html = render::home_page(&view, &booking, today);
            return with_preference(&ctx, (StatusCode::UNPROCESSABLE_ENTITY, Html(html)));
        }
    };

    tracing::info!(
        %submission,
        domain = email_domain(&request.email),
        service = request.service_type.as_str(),
        "booking submitted"
    );

    match state.delivery.deliver(&request).await {
        DeliveryOutcome::Delivered { transport, .. } => {
            tracing::info!(%submission, transport, "booking accepted");
            let booking = BookingView {
                notice: Some(Notice::Success),
                ..BookingView::default()
            };
            let html = render::home_page(&view, &booking, today);
            with_preference(&ctx, Html(html))
        }
        DeliveryOutcome::Exhausted { mailto, .. } => {
            tracing::error!(%submission, "booking could not be delivered");
            let booking = BookingView {
                values: form,
                errors: Vec::new(),
                notice: Some(Notice::Failure { mailto }),
            };
            let html = render::home_page(&view, &booking, today);
            with_preference(&ctx, (StatusCode::BAD_GATEWAY, Html(html)))
        }
    }
}
