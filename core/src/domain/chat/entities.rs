use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload forwarded to the chat webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub text: String,
    pub channel: String,
    pub user: String,
    pub mention: String,
    pub date: String,
}
