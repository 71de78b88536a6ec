use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    menu::{
        ports::LLMClient,
        prompts::{MAX_TOKENS, TODAY_MENU_TEMPERATURE},
    },
};

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    base_url: String,
    text_model: String,
    vision_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<Part>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.openai_api_key,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model,
            vision_model: config.vision_model,
            client: Client::new(),
        }
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        // A choice without content is treated as an empty reply.
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn image_data_url(image_data: &[u8], mime_type: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(image_data)
    )
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_text(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.text_model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                Message {
                    role: "user",
                    content: MessageContent::Text(user_prompt),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: Some(TODAY_MENU_TEMPERATURE),
        };

        self.call_chat_completions(request).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.vision_model.clone(),
            messages: vec![Message {
                role: "user",
                content: MessageContent::Parts(vec![
                    Part::Text { text: prompt },
                    Part::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_url(&image_data, &mime_type),
                            detail: "high",
                        },
                    },
                ]),
            }],
            max_tokens: MAX_TOKENS,
            temperature: None,
        };

        self.call_chat_completions(request).await
    }
}
