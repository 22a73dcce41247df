//! Fixed-point money arithmetic.
//!
//! Amounts are stored as integer minor units (centimes for DZD). All
//! intermediate pricing math stays in minor units; formatting into a
//! human-readable major-unit string happens only at the display boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const MINOR_PER_MAJOR: i64 = 100;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    minor: i64,
}

impl Money {
    pub const ZERO: Money = Money { minor: 0 };

    pub const fn from_minor(minor: i64) -> Self {
        Self { minor }
    }

    pub const fn from_major(major: i64) -> Self {
        Self {
            minor: major * MINOR_PER_MAJOR,
        }
    }

    pub const fn minor(self) -> i64 {
        self.minor
    }

    pub fn is_zero(self) -> bool {
        self.minor == 0
    }

    /// Apply a whole-number percentage, rounding half-up to the nearest
    /// minor unit. This is the single rounding point for a percentage step.
    pub fn percent(self, pct: u32) -> Money {
        let numerator = self.minor as i128 * pct as i128;
        let quotient = numerator.div_euclid(100);
        let remainder = numerator.rem_euclid(100);
        let rounded = if remainder * 2 >= 100 {
            quotient + 1
        } else {
            quotient
        };
        Money {
            minor: rounded as i64,
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            minor: self.minor + rhs.minor,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.minor += rhs.minor;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money {
            minor: self.minor - rhs.minor,
        }
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.minor -= rhs.minor;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Renders the major-unit amount with space-grouped thousands and the DZD
/// currency code, e.g. `142 800 DZD`. Centimes are shown only when nonzero.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.minor < 0;
        let abs = self.minor.unsigned_abs();
        let major = abs / MINOR_PER_MAJOR as u64;
        let cents = abs % MINOR_PER_MAJOR as u64;

        let digits = major.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }

        if negative {
            write!(f, "-")?;
        }
        if cents == 0 {
            write!(f, "{} DZD", grouped)
        } else {
            write!(f, "{}.{:02} DZD", grouped, cents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_minor_round_trip() {
        let m = Money::from_major(120_000);
        assert_eq!(m.minor(), 12_000_000);
        assert_eq!(m, Money::from_minor(12_000_000));
    }

    #[test]
    fn test_percent_exact() {
        assert_eq!(
            Money::from_major(120_000).percent(19),
            Money::from_major(22_800)
        );
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 33 minor * 50% = 16.5 minor → 17
        assert_eq!(Money::from_minor(33).percent(50), Money::from_minor(17));
        // 31 minor * 50% = 15.5 minor → 16
        assert_eq!(Money::from_minor(31).percent(50), Money::from_minor(16));
    }

    #[test]
    fn test_percent_zero() {
        assert_eq!(Money::from_major(500).percent(0), Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(1), Money::from_major(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(3));
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::from_major(142_800).to_string(), "142 800 DZD");
        assert_eq!(Money::from_major(900).to_string(), "900 DZD");
        assert_eq!(Money::from_minor(150).to_string(), "1.50 DZD");
        assert_eq!(Money::from_major(-5_000).to_string(), "-5 000 DZD");
    }
}
