use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Extracted price-list text keyed by site URL.
///
/// Clones share the same map. Entries live until deleted or until the
/// process exits; nothing is evicted.
#[derive(Debug, Clone, Default)]
pub struct PriceListStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl PriceListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, site_url: &str, text: String) {
        let mut entries = self.entries.write().await;
        entries.insert(site_url.to_string(), text);
        log::info!("Stored price list for {} ({} entries)", site_url, entries.len());
    }

    pub async fn get(&self, site_url: &str) -> Option<String> {
        self.entries.read().await.get(site_url).cloned()
    }

    /// Returns whether an entry was present. Deleting a missing key is fine.
    pub async fn delete(&self, site_url: &str) -> bool {
        let removed = self.entries.write().await.remove(site_url).is_some();
        if removed {
            log::info!("Deleted price list for {}", site_url);
        }
        removed
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
