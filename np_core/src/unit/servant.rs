//! Servant catalog data and the configured servant instance

use crate::arith::ScaledInt;
use crate::buff::Buff;
use crate::error::CalcError;
use crate::types::{Attribute, CardType, NpTarget, ServantClass, Trait};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tolerance for a hit distribution summing to 1
const HIT_DISTRIBUTION_TOLERANCE: f64 = 0.01;

/// A Noble Phantasm's damage and refund tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoblePhantasm {
    #[serde(default)]
    pub name: String,
    pub card_type: CardType,
    pub target: NpTarget,
    /// Damage multiplier per NP level 1-5
    pub multiplier: [ScaledInt; 5],
    /// Multiplier per NP level after the NP upgrade, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mult_upgrade: Option<[ScaledInt; 5]>,
    /// Supereffective bonus per overcharge level 0-4
    #[serde(default)]
    pub extra_damage: [ScaledInt; 5],
    #[serde(default)]
    pub extra_trigger: BTreeSet<Trait>,
    /// Extra damage applies once per matching trait
    #[serde(default)]
    pub extra_dmg_stacks: bool,
    /// Extra damage only exists after the NP upgrade
    #[serde(default)]
    pub extra_requires_upgrade: bool,
    /// NP gain per hit, in percent (0.84 = 0.84%)
    pub refund_rate: ScaledInt,
    /// Fraction of total damage dealt by each hit
    pub hit_distribution: Vec<f64>,
}

impl NoblePhantasm {
    /// Check that the hit distribution sums to roughly 1
    ///
    /// The calculation itself never calls this.
    pub fn validate(&self) -> Result<(), String> {
        let sum: f64 = self.hit_distribution.iter().sum();
        if self.hit_distribution.is_empty() || (sum - 1.0).abs() > HIT_DISTRIBUTION_TOLERANCE {
            return Err(format!(
                "hit distribution of {} sums to {:.3}",
                self.name, sum
            ));
        }
        Ok(())
    }
}

/// A skill as the list of buffs it grants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub buffs: Vec<Buff>,
}

/// Class affinity override for a specific servant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassOverride {
    pub defender: ServantClass,
    pub multiplier: ScaledInt,
}

/// Catalog record for a servant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServantData {
    pub name: String,
    #[serde(default)]
    pub rarity: u8,
    pub class: ServantClass,
    pub attribute: Attribute,
    /// `(level, attack)` pairs
    #[serde(default)]
    pub attack_stats: Vec<(u32, u32)>,
    #[serde(default)]
    pub nps: Vec<NoblePhantasm>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Always-on buffs
    #[serde(default)]
    pub passives: Vec<Buff>,
    #[serde(default)]
    pub class_overrides: Vec<ClassOverride>,
}

impl ServantData {
    pub fn new(name: &str, class: ServantClass, attribute: Attribute) -> Self {
        ServantData {
            name: name.to_string(),
            rarity: 0,
            class,
            attribute,
            attack_stats: Vec::new(),
            nps: Vec::new(),
            skills: Vec::new(),
            passives: Vec::new(),
            class_overrides: Vec::new(),
        }
    }

    pub fn with_attack(mut self, level: u32, attack: u32) -> Self {
        self.attack_stats.push((level, attack));
        self
    }

    pub fn with_np(mut self, np: NoblePhantasm) -> Self {
        self.nps.push(np);
        self
    }

    /// Attack stat at a level; missing levels are an error, never interpolated
    pub fn attack_at(&self, level: u32) -> Result<u32, CalcError> {
        self.attack_stats
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, attack)| *attack)
            .ok_or_else(|| CalcError::MissingAttackStat {
                servant: self.name.clone(),
                level,
            })
    }

    /// The NP of the selected card type, or the first NP when none is selected
    pub fn np_for(&self, card_type: Option<CardType>) -> Result<&NoblePhantasm, CalcError> {
        match card_type {
            Some(card_type) => self
                .nps
                .iter()
                .find(|np| np.card_type == card_type)
                .ok_or_else(|| CalcError::NoNoblePhantasm {
                    servant: self.name.clone(),
                    card_type,
                }),
            None => self.nps.first().ok_or_else(|| CalcError::NoNoblePhantasms {
                servant: self.name.clone(),
            }),
        }
    }

    /// Class affinity override against a defender class
    pub fn class_override(&self, defender: ServantClass) -> Option<ScaledInt> {
        self.class_overrides
            .iter()
            .find(|o| o.defender == defender)
            .map(|o| o.multiplier)
    }
}

fn default_np_level() -> u8 {
    1
}

/// A servant as configured for a party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servant {
    pub data: ServantData,
    pub level: u32,
    #[serde(default = "default_np_level")]
    pub np_level: u8,
    #[serde(default)]
    pub fou_attack: u32,
    /// Use the upgraded NP (previewed heuristically when the NP has no upgrade)
    #[serde(default)]
    pub np_upgraded: bool,
}

impl Servant {
    pub fn new(data: ServantData, level: u32) -> Self {
        Servant {
            data,
            level,
            np_level: 1,
            fou_attack: 0,
            np_upgraded: false,
        }
    }

    pub fn with_np_level(mut self, np_level: u8) -> Self {
        self.np_level = np_level;
        self
    }

    pub fn with_fou(mut self, fou_attack: u32) -> Self {
        self.fou_attack = fou_attack;
        self
    }

    pub fn upgraded(mut self) -> Self {
        self.np_upgraded = true;
        self
    }

    /// Level attack plus fou bonus
    pub fn attack(&self) -> Result<u32, CalcError> {
        Ok(self.data.attack_at(self.level)? + self.fou_attack)
    }
}
