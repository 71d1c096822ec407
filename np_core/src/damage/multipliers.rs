//! Multiplier tables - card, class, class triangle, attribute triangle
//!
//! Every lookup is an exhaustive match or a fixed directed edge table.

use crate::types::{Attribute, CardType, NpTarget, ServantClass};

/// Directed class advantage edges (attacker deals 2.0x to defender)
const CLASS_ADVANTAGE: [(ServantClass, ServantClass); 12] = [
    (ServantClass::Saber, ServantClass::Lancer),
    (ServantClass::Lancer, ServantClass::Archer),
    (ServantClass::Archer, ServantClass::Saber),
    (ServantClass::Rider, ServantClass::Caster),
    (ServantClass::Caster, ServantClass::Assassin),
    (ServantClass::Assassin, ServantClass::Rider),
    (ServantClass::Ruler, ServantClass::MoonCancer),
    (ServantClass::MoonCancer, ServantClass::Avenger),
    (ServantClass::Avenger, ServantClass::Ruler),
    (ServantClass::AlterEgo, ServantClass::Foreigner),
    (ServantClass::Foreigner, ServantClass::Pretender),
    (ServantClass::Pretender, ServantClass::AlterEgo),
];

/// Directed attribute advantage edges (attacker deals 1.1x to defender)
const ATTRIBUTE_ADVANTAGE: [(Attribute, Attribute); 5] = [
    (Attribute::Man, Attribute::Sky),
    (Attribute::Sky, Attribute::Earth),
    (Attribute::Earth, Attribute::Man),
    (Attribute::Star, Attribute::Beast),
    (Attribute::Beast, Attribute::Star),
];

pub fn card_multiplier(card_type: CardType) -> f64 {
    match card_type {
        CardType::Buster => 1.5,
        CardType::Arts => 1.0,
        CardType::Quick => 0.8,
        CardType::Extra => 1.0,
    }
}

/// Class attack modifier of the attacker
pub fn class_multiplier(class: ServantClass) -> f64 {
    match class {
        ServantClass::Berserker | ServantClass::Ruler | ServantClass::Avenger => 1.1,
        ServantClass::Lancer => 1.05,
        ServantClass::Archer => 0.95,
        ServantClass::Caster | ServantClass::Assassin => 0.9,
        ServantClass::Shielder
        | ServantClass::Saber
        | ServantClass::Rider
        | ServantClass::MoonCancer
        | ServantClass::AlterEgo
        | ServantClass::Foreigner
        | ServantClass::Pretender
        | ServantClass::Beast
        | ServantClass::Knight
        | ServantClass::Cavalry
        | ServantClass::Neutral => 1.0,
    }
}

/// Class triangle multiplier, attacker against defender
///
/// Servant-specific overrides are applied by the caller before this.
pub fn class_affinity(attacker: ServantClass, defender: ServantClass) -> f64 {
    if attacker == ServantClass::Shielder || defender == ServantClass::Shielder {
        return 1.0;
    }
    if attacker == ServantClass::Berserker {
        return if defender == ServantClass::Foreigner { 0.5 } else { 1.5 };
    }
    if defender == ServantClass::Berserker {
        return 2.0;
    }
    if defender == ServantClass::Neutral {
        return 1.0;
    }
    if defender == ServantClass::Ruler && !attacker.is_extra() {
        return 0.5;
    }
    if attacker == ServantClass::AlterEgo {
        if defender.is_cavalry() {
            return 1.5;
        }
        if defender.is_knight() {
            return 0.5;
        }
    }
    if attacker == ServantClass::Pretender {
        if defender.is_knight() {
            return 1.5;
        }
        if defender.is_cavalry() {
            return 0.5;
        }
    }
    if defender == ServantClass::Knight || defender == ServantClass::Cavalry {
        return 1.0;
    }

    if CLASS_ADVANTAGE.contains(&(attacker, defender)) {
        2.0
    } else if CLASS_ADVANTAGE.contains(&(defender, attacker)) {
        0.5
    } else {
        1.0
    }
}

/// Attribute triangle multiplier, attacker against defender
pub fn attribute_multiplier(attacker: Attribute, defender: Attribute) -> f64 {
    if defender == Attribute::Neutral {
        return 1.0;
    }
    if ATTRIBUTE_ADVANTAGE.contains(&(attacker, defender)) {
        1.1
    } else if ATTRIBUTE_ADVANTAGE.contains(&(defender, attacker)) {
        0.9
    } else {
        1.0
    }
}

/// Heuristic multiplier bonus used to preview an NP upgrade the data lacks
///
/// These are approximate values, not a verified game rule. Do not tune them
/// without new source data.
pub fn upgrade_bonus(card_type: CardType, target: NpTarget) -> f64 {
    match (card_type, target) {
        (CardType::Buster, NpTarget::Single) => 2.0,
        (CardType::Arts, NpTarget::Single) => 3.0,
        (CardType::Quick, NpTarget::Single) => 4.0,
        (CardType::Buster, NpTarget::Aoe) => 1.0,
        (CardType::Arts, NpTarget::Aoe) => 1.5,
        (CardType::Quick, NpTarget::Aoe) => 2.0,
        (CardType::Buster | CardType::Arts | CardType::Quick | CardType::Extra, NpTarget::Support) => 0.0,
        (CardType::Extra, NpTarget::Single | NpTarget::Aoe) => {
            panic!("no upgrade bonus for an extra-card Noble Phantasm")
        }
    }
}
