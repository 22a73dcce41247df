//! # summit-sdk
//!
//! Rust client SDK for the Summit event platform REST backend.
//!
//! The SDK wraps the backend's paginated collections behind typed resource
//! handles, caching responses by query key, deduplicating concurrent
//! identical requests, and debouncing rapid filter edits into stable
//! committed queries.
//!
//! ## Example
//!
//! ```rust,ignore
//! use summit_sdk::prelude::*;
//!
//! let client = PortalClient::new(PortalConfig::new("https://api.summit.dz/v1"))?;
//! let demands = client.exhibition_demands();
//!
//! let mut view = demands.list();
//! view.edit_filter(|draft| draft.search = "acme".to_string());
//!
//! let mut states = view.subscribe();
//! while states.changed().await.is_ok() {
//!     println!("Update: {:?}", view.state());
//! }
//! ```
//!
//! ## Pieces
//!
//! - **`PortalClient`** / **`ResourceHandle`** - typed access per collection
//! - **`ListView`** - observable list state with last-committed-wins fetches
//! - **`DebouncedFilter`** - rate-limits filter edits into committed queries
//! - **`QueryStore`** - query-keyed page cache with mutation invalidation

pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod fetcher;
pub mod files;
pub mod mutation;
pub mod prelude;
pub mod store;
pub mod telemetry;
pub mod transport;
pub mod view;

pub use client::{PortalClient, ResourceHandle};
pub use config::PortalConfig;
pub use debounce::DebouncedFilter;
pub use error::{PortalError, Result};
pub use fetcher::CollectionFetcher;
pub use files::{derive_file_name, Download};
pub use mutation::Ack;
pub use store::{CachedPage, QueryStore, StoreConfig, StoreEvent};
pub use transport::{FilePart, FormData, HttpTransport, Transport};
pub use view::{ListState, ListView};

pub use serde_json::Value;
