use std::sync::Arc;

use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS, Method::GET])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::site::home))
        .route("/blog", get(handlers::site::blog_listing))
        .route("/portfolio/:index", get(handlers::site::lightbox))
        .route("/language/:code", get(handlers::language::switch_language))
        .route("/booking", post(handlers::booking::submit_booking))
        .route(
            "/send-booking-email",
            post(handlers::relay::send_booking_email),
        )
        .route("/api/content/:lang", get(handlers::api::content))
        .route("/api/portfolio", get(handlers::api::portfolio))
        .route("/api/blog", get(handlers::api::blog_posts))
        .route("/health", get(handlers::health::health))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
