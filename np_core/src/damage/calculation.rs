//! NP damage calculation - servant + buffs + enemy into a damage range

use super::constants::{DAMAGE_SCALE, MAX_OVERCHARGE, ROLLS, ROLL_MAX, ROLL_MIN};
use super::multipliers::{
    attribute_multiplier, card_multiplier, class_affinity, class_multiplier, upgrade_bonus,
};
use super::{NpResult, Range};
use crate::arith::{Float32Value, ScaledInt};
use crate::buff::{is_trigger_active, match_traits, BuffSet};
use crate::error::CalcError;
use crate::refund::simulate_refund_range;
use crate::types::CardType;
use crate::unit::{CraftEssence, Enemy, NoblePhantasm, Servant};
use rand::Rng;

/// Calculate damage and refund of one NP cast against one enemy
///
/// The servant's passives and the craft essence's buffs are aggregated for
/// the NP's card type and combined with `buff_sets`.
pub fn calculate_np(
    servant: &Servant,
    craft_essence: Option<&CraftEssence>,
    enemy: &Enemy,
    buff_sets: &[BuffSet],
    np_card_type: Option<CardType>,
) -> Result<NpResult, CalcError> {
    let np = servant.data.np_for(np_card_type)?;
    let buffs = collect_buffs(servant, craft_essence, np, buff_sets);

    let damage = np_damage_range(servant, craft_essence, np, enemy, &buffs)?;
    let refund = simulate_refund_range(np, enemy, &buffs, &damage);

    Ok(NpResult { damage, refund })
}

/// Calculate a single damage value using a random roll
pub fn calculate_np_rolled(
    servant: &Servant,
    craft_essence: Option<&CraftEssence>,
    enemy: &Enemy,
    buff_sets: &[BuffSet],
    np_card_type: Option<CardType>,
    rng: &mut impl Rng,
) -> Result<i64, CalcError> {
    let np = servant.data.np_for(np_card_type)?;
    let buffs = collect_buffs(servant, craft_essence, np, buff_sets);

    let cast = prepare_cast(servant, craft_essence, np, enemy, &buffs)?;
    Ok(cast.map_or(0, |c| c.damage_for_roll(random_roll(rng))))
}

/// Draw a damage roll in `0.900..=1.099`, in steps of 0.001
pub fn random_roll(rng: &mut impl Rng) -> f64 {
    f64::from(rng.gen_range(ROLL_MIN..=ROLL_MAX)) / 1000.0
}

/// Low/average/high damage for an already combined BuffSet
pub fn np_damage_range(
    servant: &Servant,
    craft_essence: Option<&CraftEssence>,
    np: &NoblePhantasm,
    enemy: &Enemy,
    buffs: &BuffSet,
) -> Result<Range<i64>, CalcError> {
    let cast = prepare_cast(servant, craft_essence, np, enemy, buffs)?;
    Ok(match cast {
        Some(cast) => ROLLS.map(|roll| cast.damage_for_roll(*roll)),
        None => Range::new(0, 0, 0),
    })
}

/// NP multiplier for the servant's NP level and upgrade state
pub fn resolve_np_multiplier(servant: &Servant, np: &NoblePhantasm) -> Result<ScaledInt, CalcError> {
    let index = usize::from(servant.np_level)
        .checked_sub(1)
        .filter(|i| *i < np.multiplier.len())
        .ok_or_else(|| CalcError::InvalidNpLevel {
            servant: servant.data.name.clone(),
            np_level: servant.np_level,
        })?;

    if !servant.np_upgraded {
        return Ok(np.multiplier[index]);
    }

    match &np.mult_upgrade {
        Some(upgraded) => Ok(upgraded[index]),
        None => {
            let bonus = upgrade_bonus(np.card_type, np.target);
            tracing::warn!(
                "{}: previewing NP upgrade with heuristic bonus {:.1}",
                servant.data.name,
                bonus
            );
            Ok(np.multiplier[index].plus(ScaledInt::from_decimal(bonus)))
        }
    }
}

/// Supereffective multiplier against the enemy at an overcharge level
///
/// Stacking NPs apply the bonus once per distinct matching trait.
pub fn extra_damage_factor(
    servant: &Servant,
    np: &NoblePhantasm,
    enemy: &Enemy,
    buffs: &BuffSet,
    overcharge: usize,
) -> f64 {
    if np.extra_trigger.is_empty() || (np.extra_requires_upgrade && !servant.np_upgraded) {
        return 1.0;
    }

    let traits = buffs.enemy_traits(enemy);
    if !is_trigger_active(&traits, &np.extra_trigger) {
        return 1.0;
    }

    let bonus = np.extra_damage[overcharge];
    let bonus = if np.extra_dmg_stacks {
        let matches = match_traits(&traits, &np.extra_trigger).len().max(1);
        bonus.times(matches as f64)
    } else {
        bonus
    };
    bonus.as_multiplier()
}

/// Everything about a cast that does not depend on the roll
struct NpCast {
    base: Float32Value,
    attack_mod: f64,
    damage_mod: f64,
    extra_factor: f64,
    flat_damage: i64,
}

impl NpCast {
    fn damage_for_roll(&self, roll: f64) -> i64 {
        let damage = self
            .base
            .times(roll)
            .times(DAMAGE_SCALE)
            .times(self.attack_mod)
            .times(self.damage_mod)
            .times(self.extra_factor)
            .floor();
        damage + self.flat_damage
    }
}

fn collect_buffs(
    servant: &Servant,
    craft_essence: Option<&CraftEssence>,
    np: &NoblePhantasm,
    buff_sets: &[BuffSet],
) -> BuffSet {
    let mut sets = buff_sets.to_vec();
    sets.push(BuffSet::from_buffs(&servant.data.passives, np.card_type));
    if let Some(ce) = craft_essence {
        sets.push(BuffSet::from_buffs(&ce.buffs, np.card_type));
    }
    BuffSet::combine(&sets, None)
}

/// Resolve the roll-independent part of the formula
///
/// Returns `None` for non-damaging NPs.
fn prepare_cast(
    servant: &Servant,
    craft_essence: Option<&CraftEssence>,
    np: &NoblePhantasm,
    enemy: &Enemy,
    buffs: &BuffSet,
) -> Result<Option<NpCast>, CalcError> {
    let overcharge = buffs.overcharge.clamp(0, MAX_OVERCHARGE) as usize;

    let np_multiplier = resolve_np_multiplier(servant, np)?;
    if np_multiplier.is_zero() {
        return Ok(None);
    }

    let extra_factor = extra_damage_factor(servant, np, enemy, buffs, overcharge);

    let attack = servant.attack()? + craft_essence.map_or(0, |ce| ce.attack_stat);
    let triangle = match servant.data.class_override(enemy.class) {
        Some(multiplier) => multiplier.value(),
        None => class_affinity(servant.data.class, enemy.class),
    };

    let base = Float32Value::new(f64::from(attack))
        .times(np_multiplier.value())
        .times(card_multiplier(np.card_type))
        .times(class_multiplier(servant.data.class))
        .times(triangle)
        .times(attribute_multiplier(servant.data.attribute, enemy.attribute));

    let damage_mod = buffs.get_power_mod(enemy).plus(buffs.get_adjusted_np_up());

    tracing::trace!(
        "{} vs {}: base {:.1}, triangle {}, extra {:.3}, overcharge {}",
        servant.data.name,
        enemy.name,
        base.value(),
        triangle,
        extra_factor,
        overcharge
    );

    Ok(Some(NpCast {
        base,
        attack_mod: buffs.attack_up.as_multiplier(),
        damage_mod: damage_mod.as_multiplier(),
        extra_factor,
        flat_damage: buffs.flat_damage,
    }))
}
