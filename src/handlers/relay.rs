use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::RelayBooking;
use crate::services::mail::template::booking_email;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayResponse {
            success: false,
            id: None,
            error: Some(error),
        }),
    )
        .into_response()
}

// POST /send-booking-email
pub async fn send_booking_email(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    // Decoded regardless of Content-Type.
    let booking: RelayBooking = match serde_json::from_slice(&body) {
        Ok(booking) => booking,
        Err(e) => {
            tracing::error!(error = %e, "booking relay received an unreadable body");
            return failure(format!("invalid booking payload: {e}"));
        }
    };

    let email = booking_email(&booking, &state.config.booking_from, &state.config.booking_to);
    match state.mailer.send(&email).await {
        Ok(receipt) => {
            tracing::info!(id = ?receipt.id, service = %booking.service_type, "booking email sent");
            Json(RelayResponse {
                success: true,
                id: receipt.id,
                error: None,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to send booking email");
            failure(format!("{e:#}"))
        }
    }
}
