use anyhow::Context;
use async_trait::async_trait;

use super::{BookingTransport, Delivery};
use crate::errors::AppError;
use crate::models::{BookingRequest, RelayBooking};

const FIELDS: [&str; 7] = ["name", "email", "phone", "serviceType", "date", "time", "message"];

/// Posts the booking to a Google Forms `formResponse` endpoint.
pub struct GoogleFormsTransport {
    url: String,
    entries: Vec<(String, String)>,
    client: reqwest::Client,
}

impl GoogleFormsTransport {
    /// `entries` maps booking field names to the form's `entry.<id>` ids.
    pub fn new(url: String, entries: Vec<(String, String)>) -> Result<Self, AppError> {
        if entries.is_empty() {
            return Err(AppError::Config(
                "GOOGLE_FORM_URL is set but GOOGLE_FORM_ENTRIES is empty".to_string(),
            ));
        }
        if let Some((field, _)) = entries.iter().find(|(field, _)| !FIELDS.contains(&field.as_str())) {
            return Err(AppError::Config(format!(
                "unknown booking field in GOOGLE_FORM_ENTRIES: {field}"
            )));
        }
        Ok(Self {
            url,
            entries,
            client: reqwest::Client::new(),
        })
    }

    fn form_fields(&self, booking: &RelayBooking) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(field, entry)| {
                let value = match field.as_str() {
                    "name" => booking.name.clone(),
                    "email" => booking.email.clone(),
                    "phone" => booking.phone.clone().unwrap_or_default(),
                    "serviceType" => booking.service_type.clone(),
                    "date" => booking.date.clone(),
                    "time" => booking.time.clone(),
                    _ => booking.message.clone().unwrap_or_default(),
                };
                (format!("entry.{entry}"), value)
            })
            .collect()
    }
}

#[async_trait]
impl BookingTransport for GoogleFormsTransport {
    fn name(&self) -> &'static str {
        "google_forms"
    }

    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<Delivery> {
        let fields = self.form_fields(&RelayBooking::from(booking));

        self.client
            .post(&self.url)
            .form(&fields)
            .send()
            .await
            .context("failed to submit Google Form")?
            .error_for_status()
            .context("Google Forms returned error")?;

        Ok(Delivery { id: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(f, e)| (f.to_string(), e.to_string())).collect()
    }

    #[test]
    fn requires_entries() {
        assert!(GoogleFormsTransport::new("https://forms".to_string(), vec![]).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = GoogleFormsTransport::new("https://forms".to_string(), entries(&[("budget", "1")]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("budget"));
    }

    #[test]
    fn maps_fields_to_entry_ids() {
        let transport = GoogleFormsTransport::new(
            "https://forms".to_string(),
            entries(&[("name", "11"), ("serviceType", "22"), ("phone", "33")]),
        )
        .unwrap();
        let booking = RelayBooking {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
            service_type: "event".to_string(),
            date: "2025-09-01".to_string(),
            time: "12:00".to_string(),
            message: None,
        };
        assert_eq!(
            transport.form_fields(&booking),
            entries(&[("entry.11", "Anna"), ("entry.22", "event"), ("entry.33", "")])
        );
    }
}
