use std::sync::Arc;

use crate::domain::{
    chat::ports::ChatRelayClient,
    menu::ports::{LLMClient, MenuRepository},
};

/// Application service; each domain implements its service trait on it.
pub struct Service<M, LLM, CH>
where
    M: MenuRepository,
    LLM: LLMClient,
    CH: ChatRelayClient,
{
    pub(crate) menu_repository: Arc<M>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) chat_relay_client: Arc<CH>,
}

impl<M, LLM, CH> Service<M, LLM, CH>
where
    M: MenuRepository,
    LLM: LLMClient,
    CH: ChatRelayClient,
{
    pub fn new(menu_repository: M, llm_client: LLM, chat_relay_client: CH) -> Self {
        Self {
            menu_repository: Arc::new(menu_repository),
            llm_client: Arc::new(llm_client),
            chat_relay_client: Arc::new(chat_relay_client),
        }
    }
}

impl<M, LLM, CH> Clone for Service<M, LLM, CH>
where
    M: MenuRepository,
    LLM: LLMClient,
    CH: ChatRelayClient,
{
    fn clone(&self) -> Self {
        Self {
            menu_repository: Arc::clone(&self.menu_repository),
            llm_client: Arc::clone(&self.llm_client),
            chat_relay_client: Arc::clone(&self.chat_relay_client),
        }
    }
}
