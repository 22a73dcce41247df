//! Deduplicated collection fetching.
//!
//! `fetch` serves from the cache when it can and otherwise issues exactly
//! one GET per distinct query key: concurrent callers asking for the same
//! key join the in-flight request over a watch channel instead of issuing
//! their own. Responses that land after their resource was invalidated are
//! handed to the caller but never written back to the cache.

use crate::error::{PortalError, Result};
use crate::store::QueryStore;
use crate::transport::Transport;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use summit_core::{Paginated, QueryKey};
use tokio::sync::{watch, Mutex};

type Outcome = Option<Result<Paginated<Value>>>;

pub struct CollectionFetcher {
    transport: Arc<dyn Transport>,
    store: QueryStore,
    in_flight: Arc<Mutex<HashMap<QueryKey, watch::Receiver<Outcome>>>>,
}

impl Clone for CollectionFetcher {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            store: self.store.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

enum Role {
    Issuer(watch::Sender<Outcome>),
    Joiner(watch::Receiver<Outcome>),
}

impl CollectionFetcher {
    pub fn new(transport: Arc<dyn Transport>, store: QueryStore) -> Self {
        Self {
            transport,
            store,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn store(&self) -> &QueryStore {
        &self.store
    }

    pub async fn fetch(&self, key: &QueryKey) -> Result<Paginated<Value>> {
        if let Some(hit) = self.store.get(key).await {
            tracing::trace!(resource = key.resource(), page = key.page(), "cache hit");
            return Ok(hit.page);
        }

        let role = {
            let mut in_flight = self.in_flight.lock().await;
            match in_flight.get(key) {
                Some(rx) => Role::Joiner(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(None);
                    in_flight.insert(key.clone(), rx);
                    Role::Issuer(tx)
                }
            }
        };

        match role {
            Role::Joiner(mut rx) => loop {
                if let Some(outcome) = rx.borrow_and_update().clone() {
                    return outcome;
                }
                rx.changed().await.map_err(|_| PortalError::Closed)?;
            },
            Role::Issuer(tx) => {
                let epoch = self.store.epoch(key.resource()).await;
                let outcome = self.issue(key).await;

                if let Ok(page) = &outcome {
                    if self.store.epoch(key.resource()).await == epoch {
                        self.store.insert(key.clone(), page.clone()).await;
                    } else {
                        tracing::debug!(
                            resource = key.resource(),
                            "resource invalidated mid-flight, response not cached"
                        );
                    }
                }

                // Unregister before publishing so a caller arriving after a
                // failure starts a fresh request instead of inheriting it.
                self.in_flight.lock().await.remove(key);
                let _ = tx.send(Some(outcome.clone()));
                outcome
            }
        }
    }

    async fn issue(&self, key: &QueryKey) -> Result<Paginated<Value>> {
        tracing::debug!(
            resource = key.resource(),
            page = key.page(),
            search = key.search().unwrap_or_default(),
            "GET collection"
        );
        let body = self.transport.get(key.resource(), &key.query_pairs()).await?;
        Ok(serde_json::from_value(body)?)
    }
}
