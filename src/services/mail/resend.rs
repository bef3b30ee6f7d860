use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{EmailProvider, OutgoingEmail, SendReceipt};

pub struct ResendProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ResendProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<SendReceipt> {
        anyhow::ensure!(!self.api_key.is_empty(), "RESEND_API_KEY is not configured");

        let body = json!({
            "from": email.from,
            "to": email.to,
            "subject": email.subject,
            "html": email.html,
            "reply_to": email.reply_to,
        });

        let resp = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("failed to call Resend API")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, detail = %detail, "Resend rejected email");
            anyhow::bail!("Resend API error: {}", status.as_u16());
        }

        // Any 2xx means the email was accepted, with or without an id.
        let id = match resp.json::<serde_json::Value>().await {
            Ok(data) => data["id"].as_str().map(str::to_string),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable Resend response body");
                None
            }
        };
        if id.is_none() {
            tracing::warn!(%status, "Resend accepted email without returning an id");
        }

        Ok(SendReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_fails_without_calling_out() {
        let provider = ResendProvider::new(String::new(), "http://127.0.0.1:9".to_string());
        let email = OutgoingEmail {
            from: "a@b.co".to_string(),
            to: vec!["c@d.co".to_string()],
            subject: "s".to_string(),
            html: "<p>x</p>".to_string(),
            reply_to: "e@f.co".to_string(),
        };
        let err = provider.send(&email).await.unwrap_err();
        assert!(err.to_string().contains("RESEND_API_KEY"));
    }
}
