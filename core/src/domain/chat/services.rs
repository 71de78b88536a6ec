use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    chat::{
        entities::ChatMessage,
        ports::{ChatRelayClient, ChatService},
        value_objects::{
            DEFAULT_CHANNEL, DEFAULT_USER, RelayChatInput, TEST_MESSAGE_MENTION,
            TEST_MESSAGE_TEXT, TEST_MESSAGE_USER,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    menu::ports::{LLMClient, MenuRepository},
};

impl From<RelayChatInput> for ChatMessage {
    fn from(input: RelayChatInput) -> Self {
        Self {
            text: input.text,
            channel: input.channel.unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            user: input.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
            mention: input.mention.unwrap_or_default(),
            date: input.date.unwrap_or_else(|| Utc::now().to_rfc3339()),
        }
    }
}

impl<M, LLM, CH> ChatService for Service<M, LLM, CH>
where
    M: MenuRepository,
    LLM: LLMClient,
    CH: ChatRelayClient,
{
    #[instrument(skip(self, input), fields(channel = ?input.channel))]
    async fn relay_message(&self, input: RelayChatInput) -> Result<serde_json::Value, CoreError> {
        if input.text.trim().is_empty() {
            return Err(CoreError::Invalid("text is required".to_string()));
        }

        self.chat_relay_client
            .send_message(ChatMessage::from(input))
            .await
    }

    #[instrument(skip(self))]
    async fn send_test_message(&self) -> Result<serde_json::Value, CoreError> {
        let message = ChatMessage {
            text: TEST_MESSAGE_TEXT.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            user: TEST_MESSAGE_USER.to_string(),
            mention: TEST_MESSAGE_MENTION.to_string(),
            date: Utc::now().to_rfc3339(),
        };

        self.chat_relay_client.send_message(message).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        chat::ports::MockChatRelayClient,
        menu::ports::{MockLLMClient, MockMenuRepository},
    };

    fn service(
        client: MockChatRelayClient,
    ) -> Service<MockMenuRepository, MockLLMClient, MockChatRelayClient> {
        Service::new(MockMenuRepository::new(), MockLLMClient::new(), client)
    }

    #[tokio::test]
    async fn relay_fills_missing_fields() {
        let mut client = MockChatRelayClient::new();
        client
            .expect_send_message()
            .withf(|m| {
                m.text == "dinner at 7"
                    && m.channel == DEFAULT_CHANNEL
                    && m.user == "ken"
                    && m.mention.is_empty()
                    && !m.date.is_empty()
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(json!({ "id": 42 })) }));

        let reply = service(client)
            .relay_message(RelayChatInput {
                text: "dinner at 7".to_string(),
                user: Some("ken".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(reply, json!({ "id": 42 }));
    }

    #[tokio::test]
    async fn relay_rejects_blank_text() {
        let mut client = MockChatRelayClient::new();
        client.expect_send_message().never();

        let err = service(client)
            .relay_message(RelayChatInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_message_uses_fixed_fields() {
        let mut client = MockChatRelayClient::new();
        client
            .expect_send_message()
            .withf(|m| {
                m.text == TEST_MESSAGE_TEXT
                    && m.user == TEST_MESSAGE_USER
                    && m.mention == TEST_MESSAGE_MENTION
            })
            .returning(|_| Box::pin(async { Ok(json!({ "ok": true })) }));

        let reply = service(client).send_test_message().await.unwrap();
        assert_eq!(reply["ok"], true);
    }

    #[tokio::test]
    async fn webhook_errors_propagate() {
        let mut client = MockChatRelayClient::new();
        client.expect_send_message().returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "webhook returned 500".to_string(),
                ))
            })
        });

        let err = service(client).send_test_message().await.unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
