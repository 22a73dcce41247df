//! Domain records and the resource seam.
//!
//! Every collection the portal exposes is a `Resource`: a serde record
//! with a stable path under the API root. Entities that go through a
//! review workflow additionally implement `Tracked`, tying them to their
//! lifecycle status enum.

use crate::money::Money;
use crate::pricing::{PaymentTiming, SpaceSize, StandType};
use crate::status::{ExhibitionStatus, Lifecycle, PitchDeckStatus, VisaStatus};
use crate::validate::{looks_like_email, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record stored in one of the backend's collections.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path under the API root, e.g. `exhibition-demands`.
    const PATH: &'static str;

    fn id(&self) -> u64;

    /// Field-level problems that must block submission. Empty means the
    /// record may be sent.
    fn validate(&self) -> Vec<ValidationError> {
        Vec::new()
    }
}

/// A resource with a review lifecycle the backend drives.
pub trait Tracked: Resource {
    type Status: Lifecycle;

    fn status(&self) -> Self::Status;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionDemand {
    pub id: u64,
    pub company: String,
    pub contact_email: String,
    pub stand_type: StandType,
    pub space_size: SpaceSize,
    pub payment_timing: PaymentTiming,
    /// Backend-granted discount, overriding the schedule's timing discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    pub status: ExhibitionStatus,
    pub created_at: DateTime<Utc>,
}

impl Resource for ExhibitionDemand {
    const PATH: &'static str = "exhibition-demands";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.company.trim().is_empty() {
            errors.push(ValidationError::new("company", "is required"));
        }
        if !looks_like_email(&self.contact_email) {
            errors.push(ValidationError::new("contact_email", "is not a valid email"));
        }
        if let Some(percent) = self.discount_percent {
            if percent > 100 {
                errors.push(ValidationError::new("discount_percent", "must be at most 100"));
            }
        }
        errors
    }
}

impl Tracked for ExhibitionDemand {
    type Status = ExhibitionStatus;

    fn status(&self) -> ExhibitionStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchDeck {
    pub id: u64,
    pub startup: String,
    pub email: String,
    pub file_name: String,
    pub status: PitchDeckStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Resource for PitchDeck {
    const PATH: &'static str = "pitch-decks";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.startup.trim().is_empty() {
            errors.push(ValidationError::new("startup", "is required"));
        }
        if !looks_like_email(&self.email) {
            errors.push(ValidationError::new("email", "is not a valid email"));
        }
        if self.file_name.trim().is_empty() {
            errors.push(ValidationError::new("file_name", "is required"));
        }
        errors
    }
}

impl Tracked for PitchDeck {
    type Status = PitchDeckStatus;

    fn status(&self) -> PitchDeckStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaDemand {
    pub id: u64,
    pub full_name: String,
    pub passport_number: String,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<NaiveDate>,
    pub status: VisaStatus,
    pub created_at: DateTime<Utc>,
}

impl Resource for VisaDemand {
    const PATH: &'static str = "visa-demands";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.full_name.trim().is_empty() {
            errors.push(ValidationError::new("full_name", "is required"));
        }
        if self.passport_number.trim().is_empty() {
            errors.push(ValidationError::new("passport_number", "is required"));
        }
        errors
    }
}

impl Tracked for VisaDemand {
    type Status = VisaStatus;

    fn status(&self) -> VisaStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideEvent {
    pub id: u64,
    pub title: String,
    pub organizer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub capacity: u32,
    pub starts_at: DateTime<Utc>,
}

impl Resource for SideEvent {
    const PATH: &'static str = "side-events";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(ValidationError::new("title", "is required"));
        }
        if self.capacity == 0 {
            errors.push(ValidationError::new("capacity", "must be positive"));
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEvent {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Resource for ProgramEvent {
    const PATH: &'static str = "program-events";

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for ContactRequest {
    const PATH: &'static str = "contact-requests";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !looks_like_email(&self.email) {
            errors.push(ValidationError::new("email", "is not a valid email"));
        }
        if self.message.trim().is_empty() {
            errors.push(ValidationError::new("message", "is required"));
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Resource for MediaPost {
    const PATH: &'static str = "media-posts";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(ValidationError::new("title", "is required"));
        }
        if self.slug.trim().is_empty() {
            errors.push(ValidationError::new("slug", "is required"));
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTransaction {
    pub id: u64,
    pub reference: String,
    pub buyer_email: String,
    pub amount: Money,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for TicketTransaction {
    const PATH: &'static str = "ticket-transactions";

    fn id(&self) -> u64 {
        self.id
    }
}
