use chat_relay::{
    ChatService, CompletionError, CompletionProvider, Config, ContextComposer, DocumentProcessor,
    OpenAiService, PriceListStore,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a handler needs, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub model: String,
    pub upload_dir: PathBuf,
    pub store: PriceListStore,
    pub processor: DocumentProcessor,
    pub chat: ChatService,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, CompletionError> {
        let provider = Arc::new(OpenAiService::from_config(config)?);
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: &Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let store = PriceListStore::new();
        let processor = DocumentProcessor::new();
        let composer = ContextComposer::new(store.clone(), processor);

        Self {
            model: config.model.clone(),
            upload_dir: config.upload_dir.clone(),
            chat: ChatService::new(composer, provider, config.has_api_key()),
            store,
            processor,
        }
    }
}
