use crate::config::Config;
use crate::error::CompletionError;
use crate::models::*;
use async_trait::async_trait;
use reqwest::Client;

pub const SYSTEM_PROMPT: &str = "You are TEKBOTIK, a helpful AI assistant for websites. \
Answer only from the provided context. \
If unsure, say you don't know. \
Prefer Slovak language when language=sk.";

pub const TEMPERATURE: f32 = 0.2;

const ERROR_BODY_LIMIT: usize = 500;

/// Anything that can turn a list of role-tagged messages into one reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> Result<String, CompletionError>;
}

/// System prompt, context block, then the language tag with the question.
pub fn build_messages(context: &str, language: &str, question: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(context),
        ChatMessage::user(format!("Language: {}\nQuestion: {}", language, question)),
    ]
}

/// Client for OpenAI-compatible `/v1/chat/completions` endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiService {
    client: Client,
    url_chat: String,
    api_key: String,
    model: String,
}

impl OpenAiService {
    pub fn from_config(config: &Config) -> Result<Self, CompletionError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        log::info!(
            "Completion client ready: model={} endpoint={} timeout={}s",
            config.model,
            config.base_url,
            config.timeout.as_secs()
        );

        Ok(Self {
            client,
            url_chat: format!("{}/v1/chat/completions", config.base_url),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiService {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature,
        };

        let response = self
            .client
            .post(&self.url_chat)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Completion provider returned {}", status);
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::Decode(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?;
        let content = choice
            .message
            .content
            .ok_or_else(|| CompletionError::Decode("choice has no message content".to_string()))?;

        Ok(content.trim().to_string())
    }
}
