use crate::{
    domain::common::{KondateConfig, services::Service},
    infrastructure::{
        chat::webhook_client::WebhookChatRelayClient,
        db::postgres::{Postgres, PostgresConfig},
        llm::openai_client::OpenAILLMClient,
        menu::repositories::menu_repository::PostgresMenuRepository,
    },
};

pub type KondateService =
    Service<PostgresMenuRepository, OpenAILLMClient, WebhookChatRelayClient>;

/// Wire the production adapters into a [`KondateService`].
pub async fn create_service(config: KondateConfig) -> Result<KondateService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig::from(&config.database)).await?;

    let menu_repository = PostgresMenuRepository::new(postgres.get_db());
    let llm_client = OpenAILLMClient::new(config.llm);
    let chat_relay_client = WebhookChatRelayClient::new(config.chat_relay);

    Ok(Service::new(menu_repository, llm_client, chat_relay_client))
}
