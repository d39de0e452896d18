use crate::document_processor::DocumentProcessor;
use crate::models::ChatRequest;
use crate::pricelist_store::PriceListStore;

pub const SITE_TEXT_LIMIT: usize = 16_000;
pub const KNOWLEDGE_TEXT_LIMIT: usize = 180_000;
pub const PRICE_LIST_LIMIT: usize = 15_000;
pub const PRICE_LIST_PLACEHOLDER: &str = "[Failed to read pricelist]";

/// Builds the grounding block sent to the model ahead of the question.
#[derive(Debug, Clone)]
pub struct ContextComposer {
    store: PriceListStore,
    processor: DocumentProcessor,
}

impl ContextComposer {
    pub fn new(store: PriceListStore, processor: DocumentProcessor) -> Self {
        Self { store, processor }
    }

    pub async fn compose(&self, request: &ChatRequest) -> String {
        let price_list = self.resolve_price_list(request).await;

        format!(
            "[CONTEXT]\nSITE_URL: {}\nPAGE_TEXT: {}\nWP_KNOWLEDGE: {}\nPRICELIST: {}",
            request.site_url.as_deref().unwrap_or_default(),
            truncate_chars(request.site_text.as_deref().unwrap_or_default(), SITE_TEXT_LIMIT),
            truncate_chars(
                request.knowledge_text.as_deref().unwrap_or_default(),
                KNOWLEDGE_TEXT_LIMIT
            ),
            truncate_chars(&price_list, PRICE_LIST_LIMIT),
        )
    }

    /// Stored text for the site first, then the inline document, then nothing.
    ///
    /// Text extracted from an inline document is cached under the site URL,
    /// so later requests from the same site skip the extraction.
    pub async fn resolve_price_list(&self, request: &ChatRequest) -> String {
        if let Some(site_url) = request.site_key() {
            if let Some(text) = self.store.get(site_url).await {
                return text;
            }
        }

        let Some(document) = &request.price_list else {
            return String::new();
        };

        match self.processor.extract_base64(&document.base64).await {
            Ok(text) => {
                if let Some(site_url) = request.site_key() {
                    self.store.put(site_url, text.clone()).await;
                }
                text
            }
            Err(e) => {
                log::warn!("Could not read inline price list {}: {}", document.name, e);
                PRICE_LIST_PLACEHOLDER.to_string()
            }
        }
    }
}

/// Keeps at most `limit` characters from the start of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InlineDocument;
    use crate::test_util::pdf_with_text;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    fn composer() -> (ContextComposer, PriceListStore) {
        let store = PriceListStore::new();
        (ContextComposer::new(store.clone(), DocumentProcessor::new()), store)
    }

    fn field<'a>(context: &'a str, label: &str, next_label: &str) -> &'a str {
        let start = context.find(label).unwrap() + label.len();
        let end = context[start..]
            .find(next_label)
            .map(|i| start + i)
            .unwrap_or(context.len());
        &context[start..end]
    }

    fn inline(base64: String) -> InlineDocument {
        InlineDocument {
            name: "cennik.pdf".to_string(),
            mime: "application/pdf".to_string(),
            base64,
        }
    }

    #[test]
    fn test_truncate_chars_keeps_prefix() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
        assert_eq!(truncate_chars("čšžýá", 2), "čš");
    }

    #[tokio::test]
    async fn test_layout_and_order() {
        let (composer, _) = composer();
        let mut request = ChatRequest::new("Hi");
        request.site_url = Some("https://shop.example".to_string());
        request.site_text = Some("Welcome".to_string());
        request.knowledge_text = Some("Opening hours 9-17".to_string());

        let context = composer.compose(&request).await;
        assert_eq!(
            context,
            "[CONTEXT]\nSITE_URL: https://shop.example\nPAGE_TEXT: Welcome\n\
             WP_KNOWLEDGE: Opening hours 9-17\nPRICELIST: "
        );
    }

    #[tokio::test]
    async fn test_absent_fields_render_empty() {
        let (composer, _) = composer();
        let context = composer.compose(&ChatRequest::new("Hi")).await;
        assert_eq!(
            context,
            "[CONTEXT]\nSITE_URL: \nPAGE_TEXT: \nWP_KNOWLEDGE: \nPRICELIST: "
        );
    }

    #[tokio::test]
    async fn test_site_text_is_truncated_to_limit() {
        let (composer, _) = composer();
        let mut request = ChatRequest::new("Hi");
        let long_text = format!("{}{}", "a".repeat(SITE_TEXT_LIMIT), "b".repeat(500));
        request.site_text = Some(long_text);

        let context = composer.compose(&request).await;
        let page_text = field(&context, "PAGE_TEXT: ", "\nWP_KNOWLEDGE: ");
        assert_eq!(page_text.chars().count(), SITE_TEXT_LIMIT);
        assert!(page_text.chars().all(|c| c == 'a'));
    }

    #[tokio::test]
    async fn test_knowledge_and_price_list_limits_are_independent() {
        let (composer, store) = composer();
        store
            .put("https://shop.example", "p".repeat(PRICE_LIST_LIMIT + 10))
            .await;
        let mut request = ChatRequest::new("Hi");
        request.site_url = Some("https://shop.example".to_string());
        request.knowledge_text = Some("k".repeat(KNOWLEDGE_TEXT_LIMIT + 10));

        let context = composer.compose(&request).await;
        let knowledge = field(&context, "WP_KNOWLEDGE: ", "\nPRICELIST: ");
        let price_list = field(&context, "PRICELIST: ", "\u{0}");
        assert_eq!(knowledge.len(), KNOWLEDGE_TEXT_LIMIT);
        assert_eq!(price_list.len(), PRICE_LIST_LIMIT);
        // The stored entry keeps its full length.
        assert_eq!(
            store.get("https://shop.example").await.unwrap().len(),
            PRICE_LIST_LIMIT + 10
        );
    }

    #[tokio::test]
    async fn test_stored_entry_beats_inline_document() {
        let (composer, store) = composer();
        store
            .put("https://shop.example", "Stored prices".to_string())
            .await;
        let mut request = ChatRequest::new("Hi");
        request.site_url = Some("https://shop.example".to_string());
        request.price_list = Some(inline(STANDARD.encode(pdf_with_text("Inline prices"))));

        let context = composer.compose(&request).await;
        assert!(context.contains("PRICELIST: Stored prices"));
        assert!(!context.contains("Inline prices"));
    }

    #[tokio::test]
    async fn test_inline_document_is_extracted_and_cached() {
        let (composer, store) = composer();
        let mut request = ChatRequest::new("Hi");
        request.site_url = Some("https://shop.example".to_string());
        request.price_list = Some(inline(STANDARD.encode(pdf_with_text("Latte 3.00"))));

        let context = composer.compose(&request).await;
        assert!(context.contains("Latte 3.00"));
        let cached = store.get("https://shop.example").await.unwrap();
        assert!(cached.contains("Latte 3.00"));
    }

    #[tokio::test]
    async fn test_inline_document_without_site_is_not_cached() {
        let (composer, store) = composer();
        let mut request = ChatRequest::new("Hi");
        request.price_list = Some(inline(STANDARD.encode(pdf_with_text("Mocha 3.40"))));

        let context = composer.compose(&request).await;
        assert!(context.contains("Mocha 3.40"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_base64_degrades_to_placeholder() {
        let (composer, store) = composer();
        let mut request = ChatRequest::new("Hi");
        request.site_url = Some("https://shop.example".to_string());
        request.price_list = Some(inline("!!not-base64!!".to_string()));

        let context = composer.compose(&request).await;
        assert!(context.ends_with(&format!("PRICELIST: {PRICE_LIST_PLACEHOLDER}")));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unparseable_document_degrades_to_placeholder() {
        let (composer, _) = composer();
        let mut request = ChatRequest::new("Hi");
        request.price_list = Some(inline(STANDARD.encode(b"plain text, not a pdf")));

        let context = composer.compose(&request).await;
        assert!(context.ends_with(PRICE_LIST_PLACEHOLDER));
    }
}
