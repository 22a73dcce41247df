//! # Summit
//!
//! Client stack for the Summit event platform: a pure domain model plus an
//! async SDK for the platform's REST backend.
//!
//! ## Features
//!
//! - **`core`** (default) - domain model: stand pricing, lifecycle
//!   statuses, collection records, pagination, query keys
//! - **`sdk`** - async REST client: query-keyed cache, deduplicated
//!   fetches, debounced filters, observable list views
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! summit = { version = "0.1", features = ["full"] }
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use summit::prelude::*;
//!
//! let client = PortalClient::new(PortalConfig::new("https://api.summit.dz/v1"))?;
//! let mut view = client.exhibition_demands().list();
//! view.edit_filter(|draft| draft.search = "acme".to_string());
//! ```

// Re-export the domain model
#[cfg(feature = "core")]
pub use summit_core as core;

// Re-export the SDK client
#[cfg(feature = "sdk")]
pub use summit_sdk as sdk;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "core")]
    pub use summit_core::{
        Action, ExhibitionDemand, ExhibitionStatus, FeeSchedule, FilterDraft, Lifecycle, Money,
        Paginated, PaymentTiming, PitchDeck, PitchDeckStatus, PricingBreakdown, QueryKey,
        Resource, SpaceSize, StandType, Tracked, ValidationError, VisaDemand, VisaStatus,
    };

    #[cfg(feature = "sdk")]
    pub use summit_sdk::{ListState, ListView, PortalClient, PortalConfig};
}
