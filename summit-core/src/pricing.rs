//! Exhibition stand pricing derivation.
//!
//! A `FeeSchedule` holds the base-cost table keyed by stand type and space
//! size plus the flat fees, discount, and tax rate the backend configures.
//! `quote` maps a categorical selection to a full `PricingBreakdown` with
//! no I/O and no hidden state: the same inputs always produce the same
//! breakdown.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandType {
    Fitted,
    Bare,
    Premium,
}

impl StandType {
    pub const ALL: &'static [StandType] = &[StandType::Fitted, StandType::Bare, StandType::Premium];

    pub fn label(self) -> &'static str {
        match self {
            StandType::Fitted => "Fitted Stand",
            StandType::Bare => "Bare Space",
            StandType::Premium => "Premium Stand",
        }
    }
}

impl fmt::Display for StandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpaceSize {
    #[serde(rename = "9")]
    Sqm9,
    #[serde(rename = "12")]
    Sqm12,
    #[serde(rename = "18")]
    Sqm18,
    #[serde(rename = "24")]
    Sqm24,
}

impl SpaceSize {
    pub const ALL: &'static [SpaceSize] = &[
        SpaceSize::Sqm9,
        SpaceSize::Sqm12,
        SpaceSize::Sqm18,
        SpaceSize::Sqm24,
    ];

    pub fn square_meters(self) -> u32 {
        match self {
            SpaceSize::Sqm9 => 9,
            SpaceSize::Sqm12 => 12,
            SpaceSize::Sqm18 => 18,
            SpaceSize::Sqm24 => 24,
        }
    }
}

impl fmt::Display for SpaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.square_meters())
    }
}

/// When the exhibitor commits to paying. Early commitment earns the
/// schedule's early-payment discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTiming {
    Early,
    Standard,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("no base cost configured for {stand} at {size}")]
    UnknownStand { stand: StandType, size: SpaceSize },
}

/// Base costs and fees for a single edition of the event.
///
/// The default schedule carries the published DZD base-cost table with no
/// flat fees; the backend overrides fees and discount per edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    base: BTreeMap<(StandType, SpaceSize), Money>,
    registration_fee: Money,
    cleaning_fee: Money,
    advertising_fee: Money,
    early_payment_discount: u32,
    tax_rate: u32,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        let mut base = BTreeMap::new();
        base.insert((StandType::Fitted, SpaceSize::Sqm9), Money::from_major(120_000));
        base.insert((StandType::Fitted, SpaceSize::Sqm12), Money::from_major(160_000));
        base.insert((StandType::Fitted, SpaceSize::Sqm18), Money::from_major(210_000));
        base.insert((StandType::Fitted, SpaceSize::Sqm24), Money::from_major(260_000));
        base.insert((StandType::Bare, SpaceSize::Sqm9), Money::from_major(90_000));
        base.insert((StandType::Bare, SpaceSize::Sqm12), Money::from_major(120_000));
        base.insert((StandType::Bare, SpaceSize::Sqm18), Money::from_major(160_000));
        base.insert((StandType::Bare, SpaceSize::Sqm24), Money::from_major(200_000));
        base.insert((StandType::Premium, SpaceSize::Sqm12), Money::from_major(220_000));
        base.insert((StandType::Premium, SpaceSize::Sqm18), Money::from_major(280_000));
        base.insert((StandType::Premium, SpaceSize::Sqm24), Money::from_major(340_000));

        Self {
            base,
            registration_fee: Money::ZERO,
            cleaning_fee: Money::ZERO,
            advertising_fee: Money::ZERO,
            early_payment_discount: 10,
            tax_rate: 19,
        }
    }
}

impl FeeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_cost(mut self, stand: StandType, size: SpaceSize, amount: Money) -> Self {
        self.base.insert((stand, size), amount);
        self
    }

    pub fn with_registration_fee(mut self, amount: Money) -> Self {
        self.registration_fee = amount;
        self
    }

    pub fn with_cleaning_fee(mut self, amount: Money) -> Self {
        self.cleaning_fee = amount;
        self
    }

    pub fn with_advertising_fee(mut self, amount: Money) -> Self {
        self.advertising_fee = amount;
        self
    }

    pub fn with_early_payment_discount(mut self, percent: u32) -> Self {
        self.early_payment_discount = percent;
        self
    }

    pub fn with_tax_rate(mut self, percent: u32) -> Self {
        self.tax_rate = percent;
        self
    }

    pub fn base_cost(&self, stand: StandType, size: SpaceSize) -> Option<Money> {
        self.base.get(&(stand, size)).copied()
    }

    /// Quote a stand, deriving the discount from the payment timing.
    pub fn quote(
        &self,
        stand: StandType,
        size: SpaceSize,
        timing: PaymentTiming,
    ) -> Result<PricingBreakdown, PricingError> {
        let discount_percent = match timing {
            PaymentTiming::Early => self.early_payment_discount,
            PaymentTiming::Standard => 0,
        };
        self.quote_with_discount(stand, size, discount_percent)
    }

    /// Quote a stand with an explicit (backend-supplied) discount percentage.
    pub fn quote_with_discount(
        &self,
        stand: StandType,
        size: SpaceSize,
        discount_percent: u32,
    ) -> Result<PricingBreakdown, PricingError> {
        let base_cost = self.base_cost(stand, size).ok_or_else(|| {
            tracing::warn!(%stand, %size, "pricing table miss");
            PricingError::UnknownStand { stand, size }
        })?;

        let subtotal = base_cost + self.registration_fee + self.cleaning_fee + self.advertising_fee;
        let discount = subtotal.percent(discount_percent);
        let taxable = subtotal - discount;
        let tax = taxable.percent(self.tax_rate);

        Ok(PricingBreakdown {
            stand,
            size,
            base_cost,
            registration_fee: self.registration_fee,
            cleaning_fee: self.cleaning_fee,
            advertising_fee: self.advertising_fee,
            subtotal,
            discount_percent,
            discount,
            taxable,
            tax_rate: self.tax_rate,
            tax,
            total: taxable + tax,
        })
    }
}

/// Full monetary breakdown for one stand selection. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    pub stand: StandType,
    pub size: SpaceSize,
    pub base_cost: Money,
    pub registration_fee: Money,
    pub cleaning_fee: Money,
    pub advertising_fee: Money,
    /// Base cost plus all flat fees, before discount and tax.
    pub subtotal: Money,
    pub discount_percent: u32,
    pub discount: Money,
    /// Subtotal after discount, the amount tax applies to.
    pub taxable: Money,
    pub tax_rate: u32,
    pub tax: Money,
    pub total: Money,
}
