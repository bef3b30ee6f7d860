//! Booking delivery.
//!
//! A booking is handed to each configured transport in turn until one accepts
//! it. Transports are never run concurrently and never retried. When every
//! transport fails, the visitor is offered a `mailto:` link so they can send
//! the booking from their own mail client.

pub mod google_forms;
pub mod relay;
pub mod web3forms;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::html::percent_encode;
use crate::models::{BookingRequest, RelayBooking};
use crate::services::mail::template::{booking_text, SUBJECT};
use crate::services::mail::EmailProvider;

/// Receipt from a transport that accepted the booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub id: Option<String>,
}

#[async_trait]
pub trait BookingTransport: Send + Sync {
    fn name(&self) -> &'static str;
    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<Delivery>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedAttempt {
    pub transport: &'static str,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered {
        transport: &'static str,
        id: Option<String>,
        failed: Vec<FailedAttempt>,
    },
    Exhausted {
        failed: Vec<FailedAttempt>,
        mailto: String,
    },
}

pub struct DeliveryChain {
    transports: Vec<Box<dyn BookingTransport>>,
    fallback_address: String,
}

impl DeliveryChain {
    pub fn new(transports: Vec<Box<dyn BookingTransport>>, fallback_address: String) -> Self {
        Self {
            transports,
            fallback_address,
        }
    }

    /// Relay first, then whichever form collectors are configured.
    pub fn from_config(config: &AppConfig, mailer: Arc<dyn EmailProvider>) -> Result<Self, AppError> {
        let mut transports: Vec<Box<dyn BookingTransport>> = vec![Box::new(relay::RelayTransport::new(
            mailer,
            config.booking_from.clone(),
            config.booking_to.clone(),
        ))];

        if !config.web3forms_access_key.is_empty() {
            transports.push(Box::new(web3forms::Web3FormsTransport::new(
                config.web3forms_access_key.clone(),
                config.web3forms_url.clone(),
            )));
        }

        if !config.google_form_url.is_empty() {
            transports.push(Box::new(google_forms::GoogleFormsTransport::new(
                config.google_form_url.clone(),
                config.google_form_entries.clone(),
            )?));
        }

        tracing::info!(
            transports = ?transports.iter().map(|t| t.name()).collect::<Vec<_>>(),
            "booking delivery chain configured"
        );

        Ok(Self::new(transports, config.booking_to.clone()))
    }

    pub fn transport_names(&self) -> Vec<&'static str> {
        self.transports.iter().map(|t| t.name()).collect()
    }

    pub async fn deliver(&self, booking: &BookingRequest) -> DeliveryOutcome {
        let mut failed = Vec::new();

        for transport in &self.transports {
            match transport.deliver(booking).await {
                Ok(delivery) => {
                    tracing::info!(
                        transport = transport.name(),
                        id = ?delivery.id,
                        previous_failures = failed.len(),
                        "booking delivered"
                    );
                    return DeliveryOutcome::Delivered {
                        transport: transport.name(),
                        id: delivery.id,
                        failed,
                    };
                }
                Err(e) => {
                    tracing::warn!(transport = transport.name(), error = %e, "booking transport failed");
                    failed.push(FailedAttempt {
                        transport: transport.name(),
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::error!(attempts = failed.len(), "all booking transports failed");
        DeliveryOutcome::Exhausted {
            failed,
            mailto: mailto_link(&self.fallback_address, booking),
        }
    }
}

/// `mailto:` URL carrying the booking as subject and plain-text body.
pub fn mailto_link(to: &str, booking: &BookingRequest) -> String {
    let body = booking_text(&RelayBooking::from(booking));
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        percent_encode(SUBJECT),
        percent_encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::NaiveDate;

    use super::*;
    use crate::models::{ServiceType, TimeSlot};

    struct Scripted {
        name: &'static str,
        ok: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl BookingTransport for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn deliver(&self, _booking: &BookingRequest) -> anyhow::Result<Delivery> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.ok {
                Ok(Delivery {
                    id: Some(format!("{}-id", self.name)),
                })
            } else {
                anyhow::bail!("{} unavailable", self.name)
            }
        }
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            name: "Anna Nowak".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
            service_type: ServiceType::Studio,
            date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            time: TimeSlot::parse("11:00").unwrap(),
            message: None,
        }
    }

    fn chain(plan: &[(&'static str, bool)]) -> (DeliveryChain, Vec<Arc<AtomicUsize>>) {
        let counters: Vec<Arc<AtomicUsize>> = plan.iter().map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let transports = plan
            .iter()
            .zip(&counters)
            .map(|(&(name, ok), calls)| {
                Box::new(Scripted {
                    name,
                    ok,
                    calls: Arc::clone(calls),
                }) as Box<dyn BookingTransport>
            })
            .collect();
        (DeliveryChain::new(transports, "owner@example.com".to_string()), counters)
    }

    fn calls(counters: &[Arc<AtomicUsize>]) -> Vec<usize> {
        counters.iter().map(|c| c.load(Ordering::SeqCst)).collect()
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let (chain, counters) = chain(&[("relay", true), ("web3forms", true)]);
        let outcome = chain.deliver(&booking()).await;
        assert_eq!(
            outcome,
            DeliveryOutcome::Delivered {
                transport: "relay",
                id: Some("relay-id".to_string()),
                failed: vec![],
            }
        );
        assert_eq!(calls(&counters), vec![1, 0]);
    }

    #[tokio::test]
    async fn falls_through_in_order() {
        let (chain, counters) = chain(&[("relay", false), ("web3forms", false), ("google_forms", true)]);
        match chain.deliver(&booking()).await {
            DeliveryOutcome::Delivered { transport, failed, .. } => {
                assert_eq!(transport, "google_forms");
                let names: Vec<_> = failed.iter().map(|f| f.transport).collect();
                assert_eq!(names, vec!["relay", "web3forms"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(calls(&counters), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn exhausted_chain_offers_mailto() {
        let (chain, counters) = chain(&[("relay", false), ("web3forms", false)]);
        match chain.deliver(&booking()).await {
            DeliveryOutcome::Exhausted { failed, mailto } => {
                assert_eq!(failed.len(), 2);
                assert!(failed[0].error.contains("relay unavailable"));
                assert!(mailto.starts_with("mailto:owner@example.com?subject="));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(calls(&counters), vec![1, 1]);
    }

    #[test]
    fn mailto_body_is_encoded() {
        let link = mailto_link("owner@example.com", &booking());
        assert!(link.contains("body=Name%3A%20Anna%20Nowak%0AEmail%3A%20anna%40example.com"));
        assert!(!link.contains(' '));
        assert!(!link[7..].contains('\n'));
    }
}
