use crate::completion_service::{build_messages, CompletionProvider, TEMPERATURE};
use crate::context_composer::ContextComposer;
use crate::error::ChatError;
use crate::models::ChatRequest;
use std::sync::Arc;
use std::time::Instant;

/// Runs one chat turn: credential check, context, completion.
#[derive(Clone)]
pub struct ChatService {
    composer: ContextComposer,
    provider: Arc<dyn CompletionProvider>,
    has_api_key: bool,
}

impl ChatService {
    pub fn new(
        composer: ContextComposer,
        provider: Arc<dyn CompletionProvider>,
        has_api_key: bool,
    ) -> Self {
        Self {
            composer,
            provider,
            has_api_key,
        }
    }

    pub async fn reply(&self, request: &ChatRequest) -> Result<String, ChatError> {
        if !self.has_api_key {
            return Err(ChatError::MissingApiKey);
        }

        let start_time = Instant::now();
        let context = self.composer.compose(request).await;
        let messages = build_messages(&context, request.language(), &request.question);

        let reply = self.provider.complete(messages, TEMPERATURE).await?;

        log::info!(
            "Answered question for {} in {} ms (context {} chars)",
            request.site_key().unwrap_or("<no site>"),
            start_time.elapsed().as_millis(),
            context.chars().count()
        );
        Ok(reply)
    }
}
