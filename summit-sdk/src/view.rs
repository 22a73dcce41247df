//! Observable list views.
//!
//! A `ListView` ties one resource's debounced filter, the shared fetcher,
//! and an observable state cell together. A background driver task turns
//! committed query keys into fetches and applies results with a
//! last-committed-wins rule: every commit gets a sequence number and a
//! result is only applied while its number is still the latest, so a slow
//! response can never overwrite a newer one. Invalidation events for the
//! view's resource trigger a refetch of the current key.

use crate::debounce::DebouncedFilter;
use crate::fetcher::CollectionFetcher;
use crate::store::StoreEvent;
use serde_json::Value;
use std::time::Duration;
use summit_core::{FilterDraft, Paginated, QueryKey, Resource};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded {
        items: Vec<T>,
        total: u64,
        page: u32,
        last_page: u32,
    },
    /// Successful response with no rows. Distinct from `Failed`.
    Empty,
    Failed {
        message: String,
    },
}

impl<T> ListState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded { items, .. } => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

pub struct ListView<T: Resource> {
    filter: DebouncedFilter,
    state_rx: watch::Receiver<ListState<T>>,
    driver: JoinHandle<()>,
}

impl<T: Resource> ListView<T> {
    /// Spawn the driver and issue the initial page-1 load.
    pub(crate) fn spawn(fetcher: CollectionFetcher, quiet_period: Duration) -> Self {
        let (mut filter, committed_rx) = DebouncedFilter::new(T::PATH, quiet_period);
        let (state_tx, state_rx) = watch::channel(ListState::Loading);
        let invalidations = fetcher.store().subscribe();

        let driver = tokio::spawn(drive::<T>(fetcher, committed_rx, invalidations, state_tx));
        filter.flush();

        Self {
            filter,
            state_rx,
            driver,
        }
    }

    /// Apply one filter edit; the commit happens after the quiet period.
    pub fn edit_filter(&mut self, apply: impl FnOnce(&mut FilterDraft)) {
        self.filter.edit(apply);
    }

    /// Jump to a page immediately, keeping the current filters.
    pub fn set_page(&mut self, page: u32) {
        self.filter.set_page(page);
    }

    /// Refetch the current filters right away (manual retry).
    pub fn refresh(&mut self) {
        self.filter.flush();
    }

    pub fn draft(&self) -> &FilterDraft {
        self.filter.draft()
    }

    /// Current state snapshot.
    pub fn state(&self) -> ListState<T> {
        self.state_rx.borrow().clone()
    }

    /// Receiver for awaiting state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.state_rx.clone()
    }

    /// State changes as a `Stream`.
    pub fn watch(&self) -> WatchStream<ListState<T>> {
        WatchStream::new(self.state_rx.clone())
    }
}

impl<T: Resource> Drop for ListView<T> {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive<T: Resource>(
    fetcher: CollectionFetcher,
    mut committed_rx: mpsc::UnboundedReceiver<QueryKey>,
    mut invalidations: broadcast::Receiver<StoreEvent>,
    state_tx: watch::Sender<ListState<T>>,
) {
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut seq: u64 = 0;
    let mut current_key: Option<QueryKey> = None;
    let mut invalidations_open = true;

    let issue = |seq: u64, key: QueryKey, outcome_tx: mpsc::UnboundedSender<(u64, _)>| {
        let fetcher = fetcher.clone();
        tokio::spawn(async move {
            let outcome = fetcher.fetch(&key).await;
            let _ = outcome_tx.send((seq, outcome));
        });
    };

    loop {
        tokio::select! {
            maybe_key = committed_rx.recv() => {
                let Some(key) = maybe_key else { break };
                seq += 1;
                current_key = Some(key.clone());
                let _ = state_tx.send(ListState::Loading);
                issue(seq, key, outcome_tx.clone());
            }

            Some((fetch_seq, outcome)) = outcome_rx.recv() => {
                if fetch_seq != seq {
                    tracing::debug!(fetch_seq, seq, "discarding stale response");
                    continue;
                }
                let _ = state_tx.send(apply::<T>(outcome));
            }

            event = invalidations.recv(), if invalidations_open => {
                match event {
                    Ok(StoreEvent::Invalidated { resource }) => {
                        let refetch = current_key
                            .as_ref()
                            .filter(|key| key.resource() == resource)
                            .cloned();
                        if let Some(key) = refetch {
                            seq += 1;
                            issue(seq, key, outcome_tx.clone());
                        }
                    }
                    Ok(StoreEvent::Loaded { .. }) => {}
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => {
                        invalidations_open = false;
                    }
                }
            }
        }
    }
}

fn apply<T: Resource>(outcome: crate::error::Result<Paginated<Value>>) -> ListState<T> {
    match outcome {
        Ok(page) => match page.try_map(serde_json::from_value::<T>) {
            Ok(page) if page.is_empty() => ListState::Empty,
            Ok(page) => ListState::Loaded {
                total: page.total,
                page: page.current_page,
                last_page: page.last_page,
                items: page.data,
            },
            Err(err) => ListState::Failed {
                message: err.to_string(),
            },
        },
        Err(err) => ListState::Failed {
            message: err.to_string(),
        },
    }
}
