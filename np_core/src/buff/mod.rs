//! Buffs - Atomic effects and their per-turn aggregation

mod power_mod;
mod set;
mod trigger;

pub use power_mod::PowerMod;
pub use set::BuffSet;
pub use trigger::{is_trigger_active, match_traits};

use crate::arith::ScaledInt;
use crate::types::{CardType, Trait};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of effect a buff carries
///
/// New effect kinds extend this enum; every consumer matches it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffType {
    AttackUp,
    CardTypeUp,
    NpDamageUp,
    /// Conditional damage bonus against matching traits
    PowerMod,
    Overcharge,
    /// Boosts the strength of NP damage up (only the largest applies)
    NpBoost,
    NpGain,
    /// Flat damage added after the roll
    DamagePlus,
    /// Grants traits to the enemy for trigger matching
    AddTrait,
}

/// A single effect from a skill, passive or craft essence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    /// Applies only to the user
    #[serde(rename = "self", default)]
    pub on_self: bool,
    /// Applies to the whole party
    #[serde(default)]
    pub team: bool,
    #[serde(rename = "type")]
    pub kind: BuffType,
    /// Decimal for percentage buffs, levels for Overcharge, flat damage for DamagePlus
    #[serde(default)]
    pub val: f64,
    /// Duration in turns
    #[serde(default)]
    pub turns: u32,
    /// Restricts the buff to one card type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    /// Trigger traits for PowerMod, granted traits for AddTrait
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trig: Option<Vec<Trait>>,
}

impl Buff {
    /// Create a one-turn buff affecting only its holder
    pub fn new(kind: BuffType, val: f64) -> Self {
        Buff {
            on_self: false,
            team: false,
            kind,
            val,
            turns: 1,
            card_type: None,
            trig: None,
        }
    }

    /// Mark the buff as self-only
    pub fn on_self(mut self) -> Self {
        self.on_self = true;
        self
    }

    /// Mark the buff as party-wide
    pub fn team(mut self) -> Self {
        self.team = true;
        self
    }

    pub fn for_turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    pub fn with_trigger(mut self, traits: Vec<Trait>) -> Self {
        self.trig = Some(traits);
        self
    }

    /// Whether the buff counts for an NP of the given card type
    pub fn applies_to(&self, card_type: CardType) -> bool {
        self.card_type.map_or(true, |c| c == card_type)
    }

    /// Value as a scaled percentage
    pub fn amount(&self) -> ScaledInt {
        ScaledInt::from_decimal(self.val)
    }

    /// Trigger traits as a set
    pub fn trigger_set(&self) -> BTreeSet<Trait> {
        self.trig.iter().flatten().cloned().collect()
    }
}
