use chrono::{DateTime, Utc};
use url::Url;
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct KondateConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub chat_relay: ChatRelayConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub text_model: String,
    pub vision_model: String,
}

#[derive(Clone, Debug)]
pub struct ChatRelayConfig {
    pub webhook_url: Url,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
