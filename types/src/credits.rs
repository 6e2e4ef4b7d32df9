//! Credit amount type.
//!
//! Credits are stored as fixed-point integers (tenths of a credit) to keep
//! fractional awards exact — the half-weight re-vote reward is +2.5, which
//! a float would represent but integer tenths store without any rounding
//! policy question. Signed: the same type carries balances and deltas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// A credit amount in tenths of a credit (may be negative).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Credits(i64);

impl Credits {
    pub const ZERO: Self = Self(0);

    /// Construct from raw tenths (25 == 2.5 credits).
    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    /// Construct from whole credits.
    pub const fn whole(credits: i64) -> Self {
        Self(credits * 10)
    }

    pub fn tenths(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Value as a float, for display only.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Whole credits, floored toward negative infinity (display affordance).
    pub fn floor_whole(&self) -> i64 {
        self.0.div_euclid(10)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Add for Credits {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Credits {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Credits {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Credits {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Credits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0 as f64 / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_credit_is_exact() {
        let half = Credits::from_tenths(25);
        assert_eq!(half + half, Credits::whole(5));
        assert_eq!(half.as_f64(), 2.5);
        assert_eq!(half.to_string(), "2.5");
    }

    #[test]
    fn floor_whole_rounds_toward_negative_infinity() {
        assert_eq!(Credits::from_tenths(25).floor_whole(), 2);
        assert_eq!(Credits::from_tenths(-25).floor_whole(), -3);
    }

    #[test]
    fn negation_and_sum() {
        let deltas = [Credits::whole(5), -Credits::whole(5), Credits::from_tenths(25)];
        let total: Credits = deltas.into_iter().sum();
        assert_eq!(total, Credits::from_tenths(25));
    }
}
