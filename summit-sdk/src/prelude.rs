//! Prelude module for convenient imports.

pub use crate::client::{PortalClient, ResourceHandle};
pub use crate::config::PortalConfig;
pub use crate::debounce::DebouncedFilter;
pub use crate::error::{PortalError, Result};
pub use crate::files::{Download, derive_file_name};
pub use crate::mutation::Ack;
pub use crate::transport::{FilePart, FormData, Transport};
pub use crate::view::{ListState, ListView};

pub use summit_core::{
    Action, ContactRequest, ExhibitionDemand, ExhibitionStatus, FeeSchedule, FilterDraft,
    Lifecycle, MediaPost, Money, Paginated, PaymentTiming, PitchDeck, PitchDeckStatus,
    PricingBreakdown, ProgramEvent, QueryKey, Resource, SideEvent, SpaceSize, StandType,
    TicketTransaction, Tracked, ValidationError, VisaDemand, VisaStatus,
};
