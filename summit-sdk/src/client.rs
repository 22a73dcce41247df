//! Portal client and typed resource handles.

use crate::config::PortalConfig;
use crate::error::Result;
use crate::fetcher::CollectionFetcher;
use crate::store::{QueryStore, StoreConfig};
use crate::transport::{HttpTransport, Transport};
use crate::view::ListView;
use std::marker::PhantomData;
use std::sync::Arc;
use summit_core::{
    ContactRequest, ExhibitionDemand, MediaPost, Paginated, PitchDeck, ProgramEvent, QueryKey,
    Resource, SideEvent, TicketTransaction, VisaDemand,
};

pub struct PortalClient {
    transport: Arc<dyn Transport>,
    store: QueryStore,
    fetcher: CollectionFetcher,
    config: PortalConfig,
}

impl PortalClient {
    pub fn new(config: PortalConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build against a caller-supplied transport (tests, instrumentation).
    pub fn with_transport(config: PortalConfig, transport: Arc<dyn Transport>) -> Self {
        let store = QueryStore::with_config(StoreConfig {
            max_cached_pages: config.max_cached_pages,
            ttl: config.cache_ttl,
        });
        let fetcher = CollectionFetcher::new(transport.clone(), store.clone());
        Self {
            transport,
            store,
            fetcher,
            config,
        }
    }

    /// Typed handle for any resource collection.
    pub fn resource<T: Resource>(&self) -> ResourceHandle<T> {
        ResourceHandle {
            transport: self.transport.clone(),
            store: self.store.clone(),
            fetcher: self.fetcher.clone(),
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }

    pub fn exhibition_demands(&self) -> ResourceHandle<ExhibitionDemand> {
        self.resource()
    }

    pub fn pitch_decks(&self) -> ResourceHandle<PitchDeck> {
        self.resource()
    }

    pub fn visa_demands(&self) -> ResourceHandle<VisaDemand> {
        self.resource()
    }

    pub fn side_events(&self) -> ResourceHandle<SideEvent> {
        self.resource()
    }

    pub fn program_events(&self) -> ResourceHandle<ProgramEvent> {
        self.resource()
    }

    pub fn contact_requests(&self) -> ResourceHandle<ContactRequest> {
        self.resource()
    }

    pub fn media_posts(&self) -> ResourceHandle<MediaPost> {
        self.resource()
    }

    pub fn ticket_transactions(&self) -> ResourceHandle<TicketTransaction> {
        self.resource()
    }

    pub fn store(&self) -> &QueryStore {
        &self.store
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}

impl Clone for PortalClient {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            store: self.store.clone(),
            fetcher: self.fetcher.clone(),
            config: self.config.clone(),
        }
    }
}

/// Typed access to one collection. Cheap to clone; all handles share the
/// client's transport, cache, and in-flight request table.
pub struct ResourceHandle<T: Resource> {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) store: QueryStore,
    pub(crate) fetcher: CollectionFetcher,
    pub(crate) config: PortalConfig,
    pub(crate) _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            store: self.store.clone(),
            fetcher: self.fetcher.clone(),
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> ResourceHandle<T> {
    /// Spawn an observable, debounced list view over this collection.
    pub fn list(&self) -> ListView<T> {
        ListView::spawn(self.fetcher.clone(), self.config.quiet_period)
    }

    /// Fetch one page directly, bypassing the debounce but not the cache.
    pub async fn page(&self, key: &QueryKey) -> Result<Paginated<T>> {
        let page = self.fetcher.fetch(key).await?;
        Ok(page.try_map(serde_json::from_value)?)
    }

    pub async fn get(&self, id: u64) -> Result<T> {
        let value = self
            .transport
            .get(&format!("{}/{}", T::PATH, id), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch several pages concurrently. Request deduplication makes this
    /// safe to call eagerly, e.g. to warm the first page of every screen.
    pub async fn prefetch(&self, keys: &[QueryKey]) -> Vec<Result<Paginated<T>>> {
        futures_util::future::join_all(keys.iter().map(|key| self.page(key))).await
    }
}
