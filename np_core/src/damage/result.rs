//! NpResult - Damage and refund of one NP against one enemy

use crate::refund::RefundResult;
use serde::{Deserialize, Serialize};

/// Immutable low/average/high triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range<T> {
    pub low: T,
    pub average: T,
    pub high: T,
}

impl<T> Range<T> {
    pub const fn new(low: T, average: T, high: T) -> Self {
        Range { low, average, high }
    }

    /// Apply `f` to each component
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Range<U> {
        Range {
            low: f(&self.low),
            average: f(&self.average),
            high: f(&self.high),
        }
    }

    /// Combine two ranges component by component
    pub fn zip_with<U, V>(&self, other: &Range<U>, mut f: impl FnMut(&T, &U) -> V) -> Range<V> {
        Range {
            low: f(&self.low, &other.low),
            average: f(&self.average, &other.average),
            high: f(&self.high, &other.high),
        }
    }

    /// Components in low, average, high order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.low, &self.average, &self.high].into_iter()
    }
}

/// Outcome of one NP cast against one enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpResult {
    pub damage: Range<i64>,
    pub refund: Range<RefundResult>,
}
