pub mod resend;
pub mod template;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendReceipt {
    /// Provider message id, when the provider returned one.
    pub id: Option<String>,
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<SendReceipt>;
}
