use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::delivery::DeliveryChain;
use crate::services::mail::EmailProvider;

pub struct AppState {
    pub config: AppConfig,
    /// Used directly by the relay endpoint; the delivery chain holds its own handle.
    pub mailer: Arc<dyn EmailProvider>,
    pub delivery: DeliveryChain,
}
