//! Money value object
//!
//! Prices are held as whole cents so cart totals stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount of money in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a line-item quantity, saturating instead of wrapping.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(8999).to_string(), "$89.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_times_and_sum() {
        let line = Money::from_cents(1000).times(3);
        assert_eq!(line, Money::from_cents(3000));

        let total: Money = [Money::from_cents(250), Money::from_cents(750)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 1000);
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Money::from_cents(u64::MAX).times(2).cents(), u64::MAX);
    }

    #[test]
    fn test_serde_uses_whole_cents() {
        let json = serde_json::to_string(&Money::from_cents(3499)).unwrap();
        assert_eq!(json, "3499");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "$34.99");
        assert!(serde_json::from_str::<Money>("\"34.99\"").is_err());
    }
}
