use reqwest::Client;
use url::Url;

use crate::domain::{
    chat::{entities::ChatMessage, ports::ChatRelayClient},
    common::{ChatRelayConfig, entities::app_errors::CoreError},
};

#[derive(Debug, Clone)]
pub struct WebhookChatRelayClient {
    webhook_url: Url,
    client: Client,
}

impl WebhookChatRelayClient {
    pub fn new(config: ChatRelayConfig) -> Self {
        Self {
            webhook_url: config.webhook_url,
            client: Client::new(),
        }
    }
}

impl ChatRelayClient for WebhookChatRelayClient {
    async fn send_message(&self, message: ChatMessage) -> Result<serde_json::Value, CoreError> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat webhook request failed: {}", e);
                CoreError::ExternalServiceError(format!("Chat webhook error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Chat webhook error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Chat webhook returned error: {} - {}",
                status, error_text
            )));
        }

        // Some webhooks answer 2xx with an empty or non-JSON body.
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read chat webhook response: {}", e);
            CoreError::ExternalServiceError(format!("Chat webhook error: {}", e))
        })?;

        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}
