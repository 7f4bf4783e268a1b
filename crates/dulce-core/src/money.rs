//! # Money
//!
//! Every price, line total and cart total is a whole number of cents.
//!
//! ## Where Amounts Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog / PriceTable        integer cents, exact                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  LineItem.unit_price × qty   integer cents, exact                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CartStore::total            Σ line totals, exact                       │
//! │                                                                         │
//! │  /api/buy response "total"   JSON number ──round──► cents               │
//! │                              (the one float boundary, see major_units)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Three relámpagos at $3.50 are `350 * 3 = 1050` cents and print as
//! `$10.50`, never `$10.499999`.
//!
//! ```rust
//! use dulce_core::Money;
//!
//! let relampago = Money::from_cents(350);
//! let brownie = Money::from_major_minor(2, 75);
//!
//! assert_eq!((relampago * 3 + brownie).to_string(), "$13.25");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents.
///
/// Serializes as a bare integer (`350`), which is also how price tables are
/// written in `checkout.toml`. Signed so that subtraction is total; amounts
/// that reach the cart are never negative (config validation rejects them).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// `from_major_minor(510, 0)` is $510.00, `from_major_minor(2, 75)` is $2.75.
    ///
    /// The sign goes on `major`; `minor` is always 0..=99.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        let cents = major * 100;
        Money(if major < 0 { cents - minor } else { cents + minor })
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price times row quantity, clamped at the `i64` bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Rounds a major-unit amount such as `620.0` to the nearest cent.
    ///
    /// `None` for NaN and infinities.
    pub fn from_major_units(amount: f64) -> Option<Self> {
        amount
            .is_finite()
            .then(|| Money((amount * 100.0).round() as i64))
    }

    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Formatting & Arithmetic
// =============================================================================

/// `$3.50`, `$0.00`, `-$1.25`.
///
/// Arithmetic below saturates instead of overflowing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Major-Unit Serde Adapter
// =============================================================================

/// Reads and writes an amount as a JSON number of major units.
///
/// The order endpoint answers `{"order_id": 42, "total": 620.0}`; receipts
/// use `#[serde(with = "crate::money::major_units")]` on that field.
pub mod major_units {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_major_units())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Money::from_major_units(amount)
            .ok_or_else(|| de::Error::custom(format!("amount is not a finite number: {amount}")))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
