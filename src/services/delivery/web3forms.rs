use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{BookingTransport, Delivery};
use crate::models::{BookingRequest, RelayBooking};
use crate::services::mail::template::{booking_text, SUBJECT};

pub struct Web3FormsTransport {
    access_key: String,
    url: String,
    client: reqwest::Client,
}

impl Web3FormsTransport {
    pub fn new(access_key: String, url: String) -> Self {
        Self {
            access_key,
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingTransport for Web3FormsTransport {
    fn name(&self) -> &'static str {
        "web3forms"
    }

    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<Delivery> {
        let relay = RelayBooking::from(booking);
        let body = json!({
            "access_key": self.access_key,
            "subject": SUBJECT,
            "from_name": relay.name,
            "replyto": relay.email,
            "name": relay.name,
            "email": relay.email,
            "phone": relay.phone,
            "service_type": relay.service_type,
            "date": relay.date,
            "time": relay.time,
            "message": booking_text(&relay),
        });

        let resp = self
            .client
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .context("failed to call Web3Forms")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Web3Forms response")?;

        if !status.is_success() || data["success"].as_bool() != Some(true) {
            anyhow::bail!(
                "Web3Forms error ({}): {}",
                status.as_u16(),
                data["message"].as_str().unwrap_or("submission rejected")
            );
        }

        Ok(Delivery { id: None })
    }
}
