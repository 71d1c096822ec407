//! NodeDamage - Per-wave, per-enemy outcome of a node run

use crate::arith::ScaledInt;
use crate::damage::{NpResult, Range};
use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Outcome for one enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDamage {
    pub enemy: String,
    pub hit_points: i64,
    pub result: Result<NpResult, CalcError>,
}

impl EnemyDamage {
    /// Whether the chosen damage component defeats the enemy
    pub fn is_killed(&self, pick: impl Fn(&Range<i64>) -> i64) -> bool {
        match &self.result {
            Ok(np) => pick(&np.damage) >= self.hit_points,
            Err(_) => false,
        }
    }
}

/// Outcome for one wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDamage {
    /// Name of the servant that cast the NP
    pub clearer: String,
    pub enemies: Vec<EnemyDamage>,
    /// Refund summed over enemies, component by component
    pub refund: Range<ScaledInt>,
}

impl WaveDamage {
    pub fn new(clearer: String, enemies: Vec<EnemyDamage>) -> Self {
        let refund = enemies
            .iter()
            .filter_map(|e| e.result.as_ref().ok())
            .fold(Range::default(), |total: Range<ScaledInt>, np| {
                total.zip_with(&np.refund, |sum, r| sum.plus(r.refunded))
            });

        WaveDamage {
            clearer,
            enemies,
            refund,
        }
    }

    /// Every enemy calculated without error
    pub fn is_complete(&self) -> bool {
        self.enemies.iter().all(|e| e.result.is_ok())
    }

    /// Every enemy defeated by the chosen damage component
    pub fn clears(&self, pick: impl Fn(&Range<i64>) -> i64) -> bool {
        self.enemies.iter().all(|e| e.is_killed(&pick))
    }
}

/// Outcome of a whole node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDamage {
    pub name: String,
    pub waves: Vec<Result<WaveDamage, CalcError>>,
}

impl NodeDamage {
    /// Every wave and every enemy calculated without error
    pub fn is_complete(&self) -> bool {
        self.waves
            .iter()
            .all(|w| w.as_ref().map_or(false, WaveDamage::is_complete))
    }

    /// Refund summed over successful waves
    pub fn total_refund(&self) -> Range<ScaledInt> {
        self.waves
            .iter()
            .filter_map(|w| w.as_ref().ok())
            .fold(Range::default(), |total: Range<ScaledInt>, wave| {
                total.zip_with(&wave.refund, |a, b| a.plus(*b))
            })
    }

    /// Every wave cleared even on the lowest roll
    pub fn guaranteed_clear(&self) -> bool {
        self.clears(|d| d.low)
    }

    /// Every wave cleared on the average roll
    pub fn average_clear(&self) -> bool {
        self.clears(|d| d.average)
    }

    fn clears(&self, pick: impl Fn(&Range<i64>) -> i64) -> bool {
        self.waves
            .iter()
            .all(|w| w.as_ref().map_or(false, |wave| wave.clears(&pick)))
    }
}
