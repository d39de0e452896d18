use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "sk";

/// Document sent inline with a chat request, base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineDocument {
    pub name: String,
    pub mime: String,
    pub base64: String,
}

/// Payload posted by the website widget to `/chat`.
///
/// `wp_knowledge` and `pricelist` are the key names older widget builds send.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub site_text: Option<String>,
    #[serde(default, alias = "wp_knowledge")]
    pub knowledge_text: Option<String>,
    #[serde(default, alias = "pricelist")]
    pub price_list: Option<InlineDocument>,
    #[serde(default)]
    pub language: Option<String>,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Site URL usable as a store key. Empty strings count as absent.
    pub fn site_key(&self) -> Option<&str> {
        self.site_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"question": "Hi"}"#).unwrap();
        assert_eq!(request.question, "Hi");
        assert_eq!(request.language(), "sk");
        assert!(request.site_key().is_none());
        assert!(request.price_list.is_none());
    }

    #[test]
    fn test_chat_request_accepts_legacy_keys() {
        let request: ChatRequest = serde_json::from_str(
            r#"{
                "question": "Price?",
                "site_url": "https://shop.example",
                "wp_knowledge": "FAQ",
                "pricelist": {"name": "p.pdf", "mime": "application/pdf", "base64": "AAAA"},
                "language": "en"
            }"#,
        )
        .unwrap();
        assert_eq!(request.knowledge_text.as_deref(), Some("FAQ"));
        assert_eq!(request.price_list.as_ref().unwrap().name, "p.pdf");
        assert_eq!(request.language(), "en");
    }

    #[test]
    fn test_null_fields_behave_as_absent() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"question": "Hi", "site_url": null, "language": null, "price_list": null}"#,
        )
        .unwrap();
        assert_eq!(request.language(), "sk");
        assert!(request.site_key().is_none());
    }

    #[test]
    fn test_empty_site_url_is_not_a_key() {
        let mut request = ChatRequest::new("Hi");
        request.site_url = Some(String::new());
        assert!(request.site_key().is_none());
    }
}
