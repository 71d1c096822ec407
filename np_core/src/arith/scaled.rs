//! ScaledInt - Integer scaled by 1000

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Internal scale factor (1000 = 1.0)
pub const SCALE: i64 = 1000;

/// A percentage or rate stored as an integer scaled by [`SCALE`]
///
/// `0.2` (20%) is stored as `200`. Addition is exact; multiplication
/// floors back to the integer grid.
///
/// Serialized as its decimal value so catalogs can write `0.2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ScaledInt(i64);

impl ScaledInt {
    pub const ZERO: ScaledInt = ScaledInt(0);

    /// Wrap an already scaled integer
    pub const fn from_raw(raw: i64) -> Self {
        ScaledInt(raw)
    }

    /// Convert a decimal value (0.2 = 20%), rounding to the nearest unit
    pub fn from_decimal(value: f64) -> Self {
        ScaledInt((value * SCALE as f64).round() as i64)
    }

    /// The scaled integer
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// The decimal value
    pub fn value(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Exact addition
    pub const fn plus(self, other: ScaledInt) -> Self {
        ScaledInt(self.0 + other.0)
    }

    /// Exact subtraction
    pub const fn minus(self, other: ScaledInt) -> Self {
        ScaledInt(self.0 - other.0)
    }

    /// Multiply the internal integer and floor the result
    pub fn times(self, multiplier: f64) -> Self {
        ScaledInt((self.0 as f64 * multiplier).floor() as i64)
    }

    /// Additive percentage as a multiplier: `1 + f32(value)`
    pub fn as_multiplier(self) -> f64 {
        1.0 + f64::from((self.0 as f64 / SCALE as f64) as f32)
    }

    /// Largest of the given values, or zero when empty
    pub fn max_of<I: IntoIterator<Item = ScaledInt>>(values: I) -> Self {
        values.into_iter().max().unwrap_or(ScaledInt::ZERO)
    }
}

impl Add for ScaledInt {
    type Output = ScaledInt;

    fn add(self, rhs: ScaledInt) -> ScaledInt {
        self.plus(rhs)
    }
}

impl Sub for ScaledInt {
    type Output = ScaledInt;

    fn sub(self, rhs: ScaledInt) -> ScaledInt {
        self.minus(rhs)
    }
}

impl Sum for ScaledInt {
    fn sum<I: Iterator<Item = ScaledInt>>(iter: I) -> Self {
        iter.fold(ScaledInt::ZERO, ScaledInt::plus)
    }
}

impl From<f64> for ScaledInt {
    fn from(value: f64) -> Self {
        ScaledInt::from_decimal(value)
    }
}

impl From<ScaledInt> for f64 {
    fn from(value: ScaledInt) -> Self {
        value.value()
    }
}

impl fmt::Display for ScaledInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(ScaledInt::from_decimal(0.2).raw(), 200);
        assert_eq!(ScaledInt::from_decimal(-0.15).raw(), -150);
        // 0.1 + 0.2 drifts in f64 but not here
        let sum = ScaledInt::from_decimal(0.1).plus(ScaledInt::from_decimal(0.2));
        assert_eq!(sum, ScaledInt::from_decimal(0.3));
    }

    #[test]
    fn test_times_floors() {
        assert_eq!(ScaledInt::from_raw(333).times(1.5).raw(), 499);
        assert_eq!(ScaledInt::from_raw(-333).times(1.5).raw(), -500);
        assert_eq!(ScaledInt::from_raw(200).times(2.0).raw(), 400);
    }

    #[test]
    fn test_as_multiplier() {
        assert!((ScaledInt::ZERO.as_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((ScaledInt::from_decimal(0.2).as_multiplier() - 1.2).abs() < 1e-7);
        assert!((ScaledInt::from_decimal(-0.5).as_multiplier() - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_max_of() {
        let values = [ScaledInt::from_raw(50), ScaledInt::from_raw(100), ScaledInt::from_raw(20)];
        assert_eq!(ScaledInt::max_of(values), ScaledInt::from_raw(100));
        assert_eq!(ScaledInt::max_of(Vec::new()), ScaledInt::ZERO);
    }

    #[test]
    fn test_serde_as_decimal() {
        let value: ScaledInt = serde_json::from_str("0.35").unwrap();
        assert_eq!(value.raw(), 350);
        assert_eq!(serde_json::to_string(&value).unwrap(), "0.35");
    }

    proptest! {
        #[test]
        fn plus_is_exact(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
            let sum = ScaledInt::from_raw(a).plus(ScaledInt::from_raw(b));
            prop_assert_eq!(sum.raw(), a + b);
            prop_assert_eq!(sum.minus(ScaledInt::from_raw(b)).raw(), a);
        }
    }
}
