use thiserror::Error;

/// Failure to turn an uploaded or inline document into text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
    #[error("PDF parser aborted while reading the document")]
    Panicked,
    #[error("extraction task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected completion response: {0}")]
    Decode(String),
    #[error("completion provider returned no choices")]
    EmptyChoices,
}

/// Outcome of a failed chat turn. The `Display` text is what the widget shows.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing OpenAI API key on server.")]
    MissingApiKey,
    #[error("Server error: {0}")]
    Completion(#[from] CompletionError),
}

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}
