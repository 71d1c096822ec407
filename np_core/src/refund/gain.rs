//! Per-hit NP gain

use crate::arith::Float32Value;
use crate::buff::BuffSet;
use crate::types::{CardType, ServantClass};
use crate::unit::{Enemy, NoblePhantasm};

/// Overkill hits refund this much more
const OVERKILL_MULTIPLIER: f64 = 1.5;

/// Multiplier for enemies flagged with special NP gain
const SPECIAL_NP_GAIN_MOD: f64 = 1.2;

/// Card weight for NP gain
pub fn np_gain_weight(card_type: CardType) -> f64 {
    match card_type {
        CardType::Buster => 0.0,
        CardType::Arts => 3.0,
        CardType::Quick => 1.0,
        CardType::Extra => 1.0,
    }
}

/// Server-side NP gain modifier of the enemy's class
pub fn enemy_server_mod(class: ServantClass) -> f64 {
    match class {
        ServantClass::Caster | ServantClass::MoonCancer => 1.2,
        ServantClass::Rider => 1.1,
        ServantClass::Assassin => 0.9,
        ServantClass::Berserker => 0.8,
        ServantClass::Shielder
        | ServantClass::Saber
        | ServantClass::Archer
        | ServantClass::Lancer
        | ServantClass::Ruler
        | ServantClass::Avenger
        | ServantClass::AlterEgo
        | ServantClass::Foreigner
        | ServantClass::Pretender
        | ServantClass::Beast
        | ServantClass::Knight
        | ServantClass::Cavalry
        | ServantClass::Neutral => 1.0,
    }
}

/// Refund of a hit that does not overkill, in hundredths of a percent
pub fn refund_per_hit(np: &NoblePhantasm, enemy: &Enemy, buffs: &BuffSet) -> i64 {
    let rate = (np.refund_rate.value() * 100.0).round();
    let special = if enemy.special_np_gain_mod {
        SPECIAL_NP_GAIN_MOD
    } else {
        1.0
    };

    Float32Value::new(buffs.card_up.as_multiplier())
        .times(np_gain_weight(np.card_type))
        .times(rate)
        .times(enemy_server_mod(enemy.class))
        .times(special)
        .times(buffs.np_gain.as_multiplier())
        .floor()
}

/// Refund of an overkilling hit
pub fn overkill_refund_per_hit(no_overkill: i64) -> i64 {
    (no_overkill as f64 * OVERKILL_MULTIPLIER).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::ScaledInt;
    use crate::types::{Attribute, NpTarget};
    use std::collections::BTreeSet;

    fn arts_np(rate: f64) -> NoblePhantasm {
        NoblePhantasm {
            name: "Arts NP".to_string(),
            card_type: CardType::Arts,
            target: NpTarget::Aoe,
            multiplier: [ScaledInt::from_decimal(4.5); 5],
            mult_upgrade: None,
            extra_damage: [ScaledInt::ZERO; 5],
            extra_trigger: BTreeSet::new(),
            extra_dmg_stacks: false,
            extra_requires_upgrade: false,
            refund_rate: ScaledInt::from_decimal(rate),
            hit_distribution: vec![1.0],
        }
    }

    #[test]
    fn test_plain_arts_refund() {
        let enemy = Enemy::new(ServantClass::Saber, Attribute::Man, 10_000);
        // 3 * 100
        assert_eq!(refund_per_hit(&arts_np(1.0), &enemy, &BuffSet::default()), 300);
    }

    #[test]
    fn test_refund_modifiers() {
        let enemy = Enemy::new(ServantClass::Caster, Attribute::Man, 10_000).with_special_np_gain();
        let buffs = BuffSet {
            card_up: ScaledInt::from_decimal(0.5),
            np_gain: ScaledInt::from_decimal(0.3),
            ..Default::default()
        };
        // 1.5 * 3 * 84 * 1.2 * 1.2 * 1.3 = 707.616
        assert_eq!(refund_per_hit(&arts_np(0.84), &enemy, &buffs), 707);
    }

    #[test]
    fn test_enemy_server_mods() {
        let cases = [
            (ServantClass::Caster, 1.2),
            (ServantClass::MoonCancer, 1.2),
            (ServantClass::Rider, 1.1),
            (ServantClass::Assassin, 0.9),
            (ServantClass::Berserker, 0.8),
            (ServantClass::Saber, 1.0),
            (ServantClass::Neutral, 1.0),
        ];
        for (class, expected) in cases {
            assert_eq!(enemy_server_mod(class), expected, "{}", class);
        }
    }

    #[test]
    fn test_refund_against_each_modded_class() {
        let np = arts_np(1.0);
        let cases = [
            (ServantClass::Berserker, 240),
            (ServantClass::Assassin, 270),
            (ServantClass::Rider, 330),
            (ServantClass::MoonCancer, 360),
        ];
        for (class, expected) in cases {
            let enemy = Enemy::new(class, Attribute::Man, 10_000);
            assert_eq!(refund_per_hit(&np, &enemy, &BuffSet::default()), expected, "{}", class);
        }
    }

    #[test]
    fn test_buster_refunds_nothing() {
        let mut np = arts_np(1.0);
        np.card_type = CardType::Buster;
        let enemy = Enemy::new(ServantClass::Saber, Attribute::Man, 10_000);
        assert_eq!(refund_per_hit(&np, &enemy, &BuffSet::default()), 0);
    }

    #[test]
    fn test_overkill_refund() {
        assert_eq!(overkill_refund_per_hit(300), 450);
        assert_eq!(overkill_refund_per_hit(251), 376);
    }
}
