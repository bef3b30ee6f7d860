use std::sync::Arc;

use async_trait::async_trait;

use super::{BookingTransport, Delivery};
use crate::models::{BookingRequest, RelayBooking};
use crate::services::mail::template::booking_email;
use crate::services::mail::EmailProvider;

/// Sends the booking notification through the transactional email provider.
pub struct RelayTransport {
    mailer: Arc<dyn EmailProvider>,
    from: String,
    to: String,
}

impl RelayTransport {
    pub fn new(mailer: Arc<dyn EmailProvider>, from: String, to: String) -> Self {
        Self { mailer, from, to }
    }
}

#[async_trait]
impl BookingTransport for RelayTransport {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<Delivery> {
        let email = booking_email(&RelayBooking::from(booking), &self.from, &self.to);
        let receipt = self.mailer.send(&email).await?;
        Ok(Delivery { id: receipt.id })
    }
}
