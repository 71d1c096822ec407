//! PowerMod - Conditional additive damage modifier

use crate::arith::ScaledInt;
use crate::types::Trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Damage bonus that applies while the trigger matches the enemy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerMod {
    #[serde(default)]
    pub trigger: BTreeSet<Trait>,
    #[serde(default)]
    pub modifier: ScaledInt,
}

impl PowerMod {
    pub fn new(trigger: BTreeSet<Trait>, modifier: ScaledInt) -> Self {
        PowerMod { trigger, modifier }
    }

    /// Placeholder used to pad fixed slot counts
    pub fn is_empty(&self) -> bool {
        self.trigger.is_empty() || self.modifier.is_zero()
    }
}
