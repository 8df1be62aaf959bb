//! Exact money arithmetic for prices, fees, and totals.

use serde::{Deserialize, Serialize};

/// Money amount stored as integer cents so arithmetic stays exact.
///
/// All platform amounts (menu prices, delivery fees, order totals) use this
/// type. Addition, subtraction, and quantity multiplication are exact;
/// [`Money::apply_rate`] is the single place a fractional rate touches an
/// amount, rounding to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1299 = $12.99)
    cents: i64,
}

impl Money {
    /// Creates an amount from a cent count.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates an amount from a whole dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self::from_cents(dollars * 100)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Total amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Whole-dollar portion of the amount.
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Cent remainder after the whole dollars.
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// True if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// True if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// True if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies the amount by an item quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::from_cents(self.cents * quantity as i64)
    }

    /// Applies a fractional rate (e.g. a tax rate), rounding to the
    /// nearest cent.
    ///
    /// `Money::from_cents(2598).apply_rate(0.08)` is 208 cents.
    pub fn apply_rate(&self, rate: f64) -> Money {
        Money::from_cents((self.cents as f64 * rate).round() as i64)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(f, "{sign}${}.{:02}", self.dollars().abs(), self.cents_part())
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money::from_cents(self.cents + rhs.cents)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::from_cents(self.cents - rhs.cents)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.cents -= rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1299);
        assert_eq!(money.cents(), 1299);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_dollars() {
        let money = Money::from_dollars(100);
        assert_eq!(money.cents(), 10000);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1299).to_string(), "$12.99");
        assert_eq!(Money::from_cents(100).to_string(), "$1.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1299).to_string(), "-$12.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(299);

        assert_eq!((a + b).cents(), 1299);
        assert_eq!((a - b).cents(), 701);
        assert_eq!(b.multiply(3).cents(), 897);
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_apply_rate_rounds_to_nearest_cent() {
        // 2598 * 0.08 = 207.84 -> 208
        assert_eq!(Money::from_cents(2598).apply_rate(0.08).cents(), 208);
        // 10000 * 0.08 = 800 exactly
        assert_eq!(Money::from_dollars(100).apply_rate(0.08).cents(), 800);
        assert_eq!(Money::from_cents(1299).apply_rate(0.0).cents(), 0);
        assert_eq!(Money::from_cents(1299).apply_rate(1.0).cents(), 1299);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1299, 1299, 599]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 3197);
    }

    #[test]
    fn test_assign_ops() {
        let mut money = Money::from_cents(100);
        money += Money::from_cents(50);
        assert_eq!(money.cents(), 150);
        money -= Money::from_cents(30);
        assert_eq!(money.cents(), 120);
    }

    #[test]
    fn test_serialization_round_trip() {
        let money = Money::from_cents(3105);
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }
}
