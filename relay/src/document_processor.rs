use crate::error::ExtractError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::panic::{self, AssertUnwindSafe};

/// Turns price-list documents into plain text.
///
/// Parsing is CPU bound, so the async entry points hand the work to the
/// blocking pool and leave the request executor free.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_bytes(&self, bytes: Vec<u8>) -> Result<String, ExtractError> {
        tokio::task::spawn_blocking(move || extract_text_from_bytes(&bytes))
            .await
            .map_err(|e| ExtractError::Task(e.to_string()))?
    }

    pub async fn extract_base64(&self, payload: &str) -> Result<String, ExtractError> {
        let bytes = decode_base64_document(payload)?;
        log::info!("Decoded inline document ({} bytes)", bytes.len());
        self.extract_bytes(bytes).await
    }
}

/// Concatenated text of every page, in page order.
///
/// A document without a text layer gives an empty string. The PDF parser is
/// known to panic on some malformed input, so panics are reported as
/// [`ExtractError::Panicked`] instead of unwinding into the caller.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Panicked),
    }
}

/// Decodes a standard-alphabet base64 payload.
///
/// Accepts `data:<mime>;base64,` URLs and line-wrapped input, both of which
/// browsers produce when reading files.
pub fn decode_base64_document(payload: &str) -> Result<Vec<u8>, ExtractError> {
    let payload = payload.trim();
    let payload = match payload.strip_prefix("data:") {
        Some(rest) => rest
            .split_once("base64,")
            .map(|(_, data)| data)
            .unwrap_or(rest),
        None => payload,
    };
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}
