//! BuffSet - Additive aggregation of the buffs active for one turn

use super::{is_trigger_active, Buff, BuffType, PowerMod};
use crate::arith::ScaledInt;
use crate::types::{CardType, Trait};
use crate::unit::Enemy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Aggregated buff totals for one party member on one turn
///
/// Treated as an immutable value: every operation returns a new set.
/// `BuffSet::default()` is the identity for [`BuffSet::combine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffSet {
    #[serde(default)]
    pub attack_up: ScaledInt,
    #[serde(default)]
    pub card_up: ScaledInt,
    #[serde(default)]
    pub np_up: ScaledInt,
    #[serde(default)]
    pub np_boost: ScaledInt,
    #[serde(default)]
    pub np_gain: ScaledInt,
    #[serde(default)]
    pub power_mods: Vec<PowerMod>,
    /// Overcharge levels; clamped only when a damage formula reads it
    #[serde(default)]
    pub overcharge: i32,
    #[serde(default)]
    pub flat_damage: i64,
    /// Traits granted to the enemy while these buffs are active
    #[serde(default)]
    pub apply_traits: Vec<Trait>,
}

impl BuffSet {
    /// Aggregate raw buffs for an NP of the given card type
    ///
    /// Buffs restricted to another card type are skipped. NP boost takes the
    /// largest value; everything else sums.
    pub fn from_buffs(buffs: &[Buff], np_card_type: CardType) -> Self {
        let mut set = BuffSet::default();

        for buff in buffs.iter().filter(|b| b.applies_to(np_card_type)) {
            match buff.kind {
                BuffType::AttackUp => set.attack_up = set.attack_up.plus(buff.amount()),
                BuffType::CardTypeUp => set.card_up = set.card_up.plus(buff.amount()),
                BuffType::NpDamageUp => set.np_up = set.np_up.plus(buff.amount()),
                BuffType::NpGain => set.np_gain = set.np_gain.plus(buff.amount()),
                BuffType::NpBoost => set.np_boost = set.np_boost.max(buff.amount()),
                BuffType::Overcharge => set.overcharge += buff.val.round() as i32,
                BuffType::DamagePlus => set.flat_damage += buff.val.round() as i64,
                BuffType::PowerMod => set
                    .power_mods
                    .push(PowerMod::new(buff.trigger_set(), buff.amount())),
                BuffType::AddTrait => set.apply_traits.extend(buff.trig.iter().flatten().cloned()),
            }
        }

        set
    }

    /// Sum already aggregated sets from independent sources
    ///
    /// Power mods are concatenated and `append_mod` (a held item) goes last.
    pub fn combine(sets: &[BuffSet], append_mod: Option<PowerMod>) -> Self {
        let mut power_mods: Vec<PowerMod> = sets
            .iter()
            .flat_map(|s| s.power_mods.iter().cloned())
            .collect();
        power_mods.extend(append_mod);

        BuffSet {
            attack_up: sets.iter().map(|s| s.attack_up).sum(),
            card_up: sets.iter().map(|s| s.card_up).sum(),
            np_up: sets.iter().map(|s| s.np_up).sum(),
            np_boost: ScaledInt::max_of(sets.iter().map(|s| s.np_boost)),
            np_gain: sets.iter().map(|s| s.np_gain).sum(),
            power_mods,
            overcharge: sets.iter().map(|s| s.overcharge).sum(),
            flat_damage: sets.iter().map(|s| s.flat_damage).sum(),
            apply_traits: sets
                .iter()
                .flat_map(|s| s.apply_traits.iter().cloned())
                .collect(),
        }
    }

    /// Merge power mods sharing a trigger and fit them to `max_slots`
    ///
    /// Zero-value and empty-trigger entries are dropped, the rest keep their
    /// first-seen order, then the list is truncated or padded with empty mods.
    pub fn normalize(&self, max_slots: usize) -> Self {
        let mut merged: Vec<PowerMod> = Vec::new();
        for power_mod in &self.power_mods {
            match merged.iter_mut().find(|m| m.trigger == power_mod.trigger) {
                Some(existing) => existing.modifier = existing.modifier.plus(power_mod.modifier),
                None => merged.push(power_mod.clone()),
            }
        }

        let mut power_mods: Vec<PowerMod> = merged.into_iter().filter(|m| !m.is_empty()).collect();
        power_mods.truncate(max_slots);
        power_mods.resize(max_slots, PowerMod::default());

        BuffSet {
            power_mods,
            ..self.clone()
        }
    }

    /// The enemy's traits plus any granted by these buffs
    pub fn enemy_traits(&self, enemy: &Enemy) -> BTreeSet<Trait> {
        let mut traits = enemy.all_traits();
        traits.extend(self.apply_traits.iter().cloned());
        traits
    }

    /// Sum of power mods whose trigger matches the enemy
    pub fn get_power_mod(&self, enemy: &Enemy) -> ScaledInt {
        let traits = self.enemy_traits(enemy);
        self.power_mods
            .iter()
            .filter(|m| is_trigger_active(&traits, &m.trigger))
            .map(|m| m.modifier)
            .sum()
    }

    /// NP damage up scaled by `1 + np_boost`
    ///
    /// Best-effort model of NP boost; the exact in-game rounding is unknown.
    pub fn get_adjusted_np_up(&self) -> ScaledInt {
        self.np_up.times(self.np_boost.as_multiplier())
    }
}
