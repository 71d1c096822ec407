//! Overkill simulation - per-hit HP depletion and total refund

use super::gain::{overkill_refund_per_hit, refund_per_hit};
use super::GAUGE_UNIT_RAW;
use crate::arith::ScaledInt;
use crate::buff::BuffSet;
use crate::damage::Range;
use crate::unit::{Enemy, NoblePhantasm};
use serde::{Deserialize, Serialize};

/// Gauge refunded by one NP against one enemy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResult {
    /// Total refund as a percentage of NP gauge
    pub refunded: ScaledInt,
    /// Enemy HP remaining after each hit (negative once overkilled)
    pub hp_after_hit: Vec<i64>,
    /// Extra refund of an overkilling hit over a normal one
    pub overkill_differential: ScaledInt,
    pub overkill_hits: usize,
}

impl RefundResult {
    /// Refund in hundredths of a percent
    pub fn gauge_units(&self) -> i64 {
        self.refunded.raw() / GAUGE_UNIT_RAW
    }
}

/// Split total damage across hits
///
/// Every hit but the last is `floor(fraction * damage)`; the last deals the
/// remainder so the hits sum to `damage`. Fractions are not validated.
pub fn distribute_hits(damage: i64, distribution: &[f64]) -> Vec<i64> {
    let Some((_, leading)) = distribution.split_last() else {
        return Vec::new();
    };

    let mut hits: Vec<i64> = leading
        .iter()
        .map(|fraction| (fraction * damage as f64).floor() as i64)
        .collect();
    let dealt: i64 = hits.iter().sum();
    hits.push(damage - dealt);
    hits
}

/// Enemy HP after each hit
pub fn simulate_hits(hit_points: i64, hits: &[i64]) -> Vec<i64> {
    hits.iter()
        .scan(hit_points, |hp, hit| {
            *hp -= hit;
            Some(*hp)
        })
        .collect()
}

/// `no_overkill * hits + (with_overkill - no_overkill) * overkill_hits`
pub fn total_refund_units(
    no_overkill: i64,
    with_overkill: i64,
    hit_count: usize,
    overkill_hits: usize,
) -> i64 {
    no_overkill * hit_count as i64 + (with_overkill - no_overkill) * overkill_hits as i64
}

/// Refund for one damage value
pub fn simulate_refund(np: &NoblePhantasm, enemy: &Enemy, buffs: &BuffSet, damage: i64) -> RefundResult {
    let no_overkill = refund_per_hit(np, enemy, buffs);
    let with_overkill = overkill_refund_per_hit(no_overkill);

    let hits = distribute_hits(damage, &np.hit_distribution);
    let hp_after_hit = simulate_hits(enemy.hit_points, &hits);
    let overkill_hits = hp_after_hit.iter().filter(|hp| **hp < 0).count();

    let total = total_refund_units(no_overkill, with_overkill, hits.len(), overkill_hits);

    RefundResult {
        refunded: ScaledInt::from_raw(total * GAUGE_UNIT_RAW),
        hp_after_hit,
        overkill_differential: ScaledInt::from_raw((with_overkill - no_overkill) * GAUGE_UNIT_RAW),
        overkill_hits,
    }
}

/// Refund for each component of a damage range
pub fn simulate_refund_range(
    np: &NoblePhantasm,
    enemy: &Enemy,
    buffs: &BuffSet,
    damage: &Range<i64>,
) -> Range<RefundResult> {
    damage.map(|d| simulate_refund(np, enemy, buffs, *d))
}
