//! Integer-cent monetary amounts.
//!
//! The catalog API reports prices as decimals. Arithmetic on them (line
//! totals, the cart total) stays in decimal form and is rounded to whole
//! cents exactly once, when the result becomes a `Money` for display.

use std::fmt;

/// An amount in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    #[cfg(test)]
    pub const ZERO: Money = Money(0);

    #[cfg(test)]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent.
    pub fn from_price(price: f64) -> Self {
        Money((price * 100.0).round() as i64)
    }

    #[cfg(test)]
    pub const fn cents(&self) -> i64 {
        self.0
    }
}

/// Formats as `$12.34` (always two decimals).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
