//! Domain model for the Summit event platform.
//!
//! This crate holds the pure, I/O-free half of the Summit client stack:
//! fixed-point money and stand pricing, lifecycle statuses with their
//! presentation mapping, the domain records for each backend collection,
//! the paginated response envelope, and the normalized query-key model
//! that the SDK's fetcher and cache are built around.

pub mod money;
pub mod page;
pub mod pricing;
pub mod query;
pub mod record;
pub mod status;
pub mod validate;

pub use money::Money;
pub use page::Paginated;
pub use pricing::{
    FeeSchedule, PaymentTiming, PricingBreakdown, PricingError, SpaceSize, StandType,
};
pub use query::{FilterDraft, QueryKey, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use record::{
    ContactRequest, ExhibitionDemand, MediaPost, PitchDeck, ProgramEvent, Resource, SideEvent,
    TicketTransaction, Tracked, VisaDemand,
};
pub use status::{
    Action, ExhibitionStatus, Lifecycle, PitchDeckStatus, Presentation, Tone, VisaStatus,
};
pub use validate::ValidationError;
