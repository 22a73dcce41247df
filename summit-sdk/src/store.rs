//! Query-keyed response cache.
//!
//! Pages are cached under their full `QueryKey` with LRU capacity and an
//! optional TTL. The store follows a single-writer discipline: only the
//! fetcher's completion path inserts pages and only the mutation paths
//! invalidate them; everything else reads. A per-resource epoch counter
//! lets the fetcher detect that a resource was invalidated while one of
//! its requests was still in flight.

use lru::LruCache;
use serde_json::Value;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use summit_core::{Paginated, QueryKey};
use tokio::sync::{broadcast, RwLock};
use tokio::time::Instant;

pub const DEFAULT_MAX_CACHED_PAGES: usize = 256;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of cached pages across all resources before LRU
    /// eviction kicks in.
    pub max_cached_pages: usize,
    /// Entries older than this are treated as absent on read.
    pub ttl: Option<Duration>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_cached_pages: DEFAULT_MAX_CACHED_PAGES,
            ttl: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CachedPage {
    pub page: Paginated<Value>,
    pub fetched_at: Instant,
}

#[derive(Debug, Clone)]
pub enum StoreEvent {
    Loaded { key: QueryKey },
    Invalidated { resource: String },
}

pub struct QueryStore {
    pages: Arc<RwLock<LruCache<QueryKey, CachedPage>>>,
    epochs: Arc<RwLock<HashMap<String, u64>>>,
    events_tx: broadcast::Sender<StoreEvent>,
    config: StoreConfig,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_cached_pages.max(1)).expect("capacity is nonzero");
        let (events_tx, _) = broadcast::channel(256);
        Self {
            pages: Arc::new(RwLock::new(LruCache::new(capacity))),
            epochs: Arc::new(RwLock::new(HashMap::new())),
            events_tx,
            config,
        }
    }

    /// Fresh cached page for the key, if any. Expired entries are dropped
    /// on the way out.
    pub async fn get(&self, key: &QueryKey) -> Option<CachedPage> {
        let mut pages = self.pages.write().await;
        let entry = pages.get(key)?.clone();
        if let Some(ttl) = self.config.ttl {
            if entry.fetched_at.elapsed() > ttl {
                pages.pop(key);
                return None;
            }
        }
        Some(entry)
    }

    pub(crate) async fn insert(&self, key: QueryKey, page: Paginated<Value>) {
        let mut pages = self.pages.write().await;
        pages.put(
            key.clone(),
            CachedPage {
                page,
                fetched_at: Instant::now(),
            },
        );
        drop(pages);
        let _ = self.events_tx.send(StoreEvent::Loaded { key });
    }

    /// Drop every cached page of a resource and bump its epoch. Called
    /// after any successful mutation against the resource.
    pub async fn invalidate(&self, resource: &str) {
        {
            let mut epochs = self.epochs.write().await;
            *epochs.entry(resource.to_string()).or_insert(0) += 1;
        }

        let mut pages = self.pages.write().await;
        let stale: Vec<QueryKey> = pages
            .iter()
            .filter(|(key, _)| key.resource() == resource)
            .map(|(key, _)| key.clone())
            .collect();
        let dropped = stale.len();
        for key in stale {
            pages.pop(&key);
        }
        drop(pages);

        tracing::debug!(resource, dropped, "invalidated cached pages");
        let _ = self.events_tx.send(StoreEvent::Invalidated {
            resource: resource.to_string(),
        });
    }

    pub async fn epoch(&self, resource: &str) -> u64 {
        self.epochs.read().await.get(resource).copied().unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events_tx.subscribe()
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for QueryStore {
    fn clone(&self) -> Self {
        Self {
            pages: self.pages.clone(),
            epochs: self.epochs.clone(),
            events_tx: self.events_tx.clone(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_of(ids: &[u64]) -> Paginated<Value> {
        Paginated::single_page(ids.iter().map(|id| json!({ "id": id })).collect())
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = QueryStore::new();
        let key = QueryKey::new("pitch-decks").with_search("acme");

        assert!(store.get(&key).await.is_none());
        store.insert(key.clone(), page_of(&[1, 2])).await;

        let hit = store.get(&key).await.expect("cached");
        assert_eq!(hit.page.len(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_only_drops_matching_resource() {
        let store = QueryStore::new();
        let decks = QueryKey::new("pitch-decks");
        let visas = QueryKey::new("visa-demands");

        store.insert(decks.clone(), page_of(&[1])).await;
        store.insert(visas.clone(), page_of(&[2])).await;

        store.invalidate("pitch-decks").await;

        assert!(store.get(&decks).await.is_none());
        assert!(store.get(&visas).await.is_some());
    }

    #[tokio::test]
    async fn test_invalidate_bumps_epoch() {
        let store = QueryStore::new();
        assert_eq!(store.epoch("visa-demands").await, 0);
        store.invalidate("visa-demands").await;
        store.invalidate("visa-demands").await;
        assert_eq!(store.epoch("visa-demands").await, 2);
        assert_eq!(store.epoch("pitch-decks").await, 0);
    }

    #[tokio::test]
    async fn test_lru_capacity_evicts_oldest() {
        let store = QueryStore::with_config(StoreConfig {
            max_cached_pages: 2,
            ttl: None,
        });

        let first = QueryKey::new("side-events").with_page(1);
        let second = QueryKey::new("side-events").with_page(2);
        let third = QueryKey::new("side-events").with_page(3);

        store.insert(first.clone(), page_of(&[1])).await;
        store.insert(second.clone(), page_of(&[2])).await;
        store.insert(third.clone(), page_of(&[3])).await;

        assert!(store.get(&first).await.is_none());
        assert!(store.get(&second).await.is_some());
        assert!(store.get(&third).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_expires_entries() {
        let store = QueryStore::with_config(StoreConfig {
            max_cached_pages: 16,
            ttl: Some(Duration::from_secs(60)),
        });
        let key = QueryKey::new("media-posts");

        store.insert(key.clone(), page_of(&[1])).await;
        assert!(store.get(&key).await.is_some());

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(store.get(&key).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_events_reach_subscribers() {
        let store = QueryStore::new();
        let mut events = store.subscribe();

        store.invalidate("contact-requests").await;

        match events.recv().await.unwrap() {
            StoreEvent::Invalidated { resource } => assert_eq!(resource, "contact-requests"),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
