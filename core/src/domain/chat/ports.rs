use crate::domain::{
    chat::{entities::ChatMessage, value_objects::RelayChatInput},
    common::entities::app_errors::CoreError,
};

/// Client for the third-party chat webhook
#[cfg_attr(test, mockall::automock)]
pub trait ChatRelayClient: Send + Sync {
    /// Post a message and return the webhook's JSON reply.
    fn send_message(
        &self,
        message: ChatMessage,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn relay_message(
        &self,
        input: RelayChatInput,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;

    fn send_test_message(
        &self,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
