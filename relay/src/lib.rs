pub mod chat_service;
pub mod completion_service;
pub mod config;
pub mod context_composer;
pub mod document_processor;
pub mod error;
pub mod models;
pub mod pricelist_store;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use chat_service::ChatService;
pub use completion_service::{CompletionProvider, OpenAiService};
pub use config::Config;
pub use context_composer::ContextComposer;
pub use document_processor::DocumentProcessor;
pub use error::{ChatError, CompletionError, ConfigError, ExtractError};
pub use models::*;
pub use pricelist_store::PriceListStore;
