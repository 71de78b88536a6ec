#[derive(Debug, Clone, Default)]
pub struct RelayChatInput {
    pub text: String,
    pub channel: Option<String>,
    pub user: Option<String>,
    pub mention: Option<String>,
    pub date: Option<String>,
}

pub const DEFAULT_CHANNEL: &str = "general";
pub const DEFAULT_USER: &str = "anonymous";

pub const TEST_MESSAGE_TEXT: &str = "Hello! This is a test message.";
pub const TEST_MESSAGE_USER: &str = "demo_user";
pub const TEST_MESSAGE_MENTION: &str = "@everyone";
