use kondate_core::domain::chat::value_objects::RelayChatInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RelayMessageValidator {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    #[schema(example = "general")]
    pub channel: Option<String>,
    pub user: Option<String>,
    pub mention: Option<String>,
    /// RFC 3339 timestamp, defaults to now.
    pub date: Option<String>,
}

impl From<RelayMessageValidator> for RelayChatInput {
    fn from(payload: RelayMessageValidator) -> Self {
        Self {
            text: payload.text,
            channel: payload.channel.filter(|s| !s.is_empty()),
            user: payload.user.filter(|s| !s.is_empty()),
            mention: payload.mention,
            date: payload.date.filter(|s| !s.is_empty()),
        }
    }
}
