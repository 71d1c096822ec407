//! Template - Party, clearers and per-turn buffs for a node

use crate::buff::{Buff, BuffSet, PowerMod};
use crate::types::CardType;
use crate::unit::{CraftEssence, Servant};
use serde::{Deserialize, Serialize};

/// A party slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMember {
    pub servant: Servant,
    #[serde(default)]
    pub craft_essence: Option<CraftEssence>,
    /// Extra power mod appended when this member casts
    #[serde(default)]
    pub held_item: Option<PowerMod>,
}

impl PartyMember {
    pub fn new(servant: Servant) -> Self {
        PartyMember {
            servant,
            craft_essence: None,
            held_item: None,
        }
    }

    pub fn with_craft_essence(mut self, ce: CraftEssence) -> Self {
        self.craft_essence = Some(ce);
        self
    }

    pub fn with_held_item(mut self, item: PowerMod) -> Self {
        self.held_item = Some(item);
        self
    }
}

/// Who clears a turn and which buffs each member has
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateTurn {
    /// Party index casting the NP
    pub clearer: usize,
    /// Selected NP card type, for servants with more than one NP
    #[serde(default)]
    pub card_type: Option<CardType>,
    /// Already aggregated buffs per party index
    #[serde(default)]
    pub buffs: Vec<BuffSet>,
}

impl TemplateTurn {
    pub fn new(clearer: usize) -> Self {
        TemplateTurn {
            clearer,
            card_type: None,
            buffs: Vec::new(),
        }
    }

    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    /// Set the buffs of one party index, padding earlier slots
    pub fn with_buffs(mut self, member: usize, buffs: BuffSet) -> Self {
        if self.buffs.len() <= member {
            self.buffs.resize(member + 1, BuffSet::default());
        }
        self.buffs[member] = buffs;
        self
    }
}

/// Use of a skill on a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillActivation {
    /// Party index of the caster
    pub member: usize,
    /// Index into the caster's skills
    pub skill: usize,
    pub turn: usize,
    /// Party index receiving single-target buffs (defaults to the caster)
    #[serde(default)]
    pub target: Option<usize>,
}

/// Party plus per-turn plan for a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub party: Vec<PartyMember>,
    /// One entry per wave
    pub turns: Vec<TemplateTurn>,
    #[serde(default)]
    pub activations: Vec<SkillActivation>,
}

impl Template {
    /// Raw buffs active per `[turn][member]` from skill activations
    ///
    /// A buff lasts `max(turns, 1)` turns from its activation. Team buffs
    /// reach the whole party, self buffs the caster, others the target.
    pub fn plan_buffs(&self) -> Vec<Vec<Vec<Buff>>> {
        let party_size = self.party.len();
        let mut matrix = vec![vec![Vec::new(); party_size]; self.turns.len()];

        for activation in &self.activations {
            let Some(skill) = self
                .party
                .get(activation.member)
                .and_then(|m| m.servant.data.skills.get(activation.skill))
            else {
                tracing::warn!(
                    "Ignoring activation of skill {} by party member {}",
                    activation.skill,
                    activation.member
                );
                continue;
            };

            for buff in &skill.buffs {
                let recipients: Vec<usize> = if buff.team {
                    (0..party_size).collect()
                } else if buff.on_self {
                    vec![activation.member]
                } else {
                    vec![activation.target.unwrap_or(activation.member)]
                };

                let end = activation.turn + buff.turns.max(1) as usize;
                for row in matrix.iter_mut().take(end).skip(activation.turn) {
                    for member in recipients.iter().filter(|m| **m < party_size) {
                        row[*member].push(buff.clone());
                    }
                }
            }
        }

        matrix
    }

    /// Buff sets reaching the clearer on one turn
    ///
    /// The clearer's planned skill buffs come first, followed by the explicit
    /// set of every party slot in that turn's row. A non-clearer slot holds
    /// what that member grants the party; slots beyond the party are ignored.
    pub fn turn_buff_sets(
        &self,
        planned: &[Vec<Vec<Buff>>],
        turn: usize,
        clearer: usize,
        card_type: CardType,
    ) -> Vec<BuffSet> {
        let from_skills = planned
            .get(turn)
            .and_then(|row| row.get(clearer))
            .map(|buffs| BuffSet::from_buffs(buffs, card_type))
            .unwrap_or_default();

        let mut sets = vec![from_skills];
        if let Some(row) = self.turns.get(turn) {
            sets.extend(row.buffs.iter().take(self.party.len()).cloned());
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::ScaledInt;
    use crate::buff::BuffType;
    use crate::types::{Attribute, ServantClass};
    use crate::unit::{ServantData, Skill};

    fn member(name: &str, skills: Vec<Skill>) -> PartyMember {
        let mut data = ServantData::new(name, ServantClass::Caster, Attribute::Man).with_attack(90, 8000);
        data.skills = skills;
        PartyMember::new(Servant::new(data, 90))
    }

    fn support() -> PartyMember {
        member(
            "Support",
            vec![
                Skill {
                    name: "Team Attack".to_string(),
                    buffs: vec![Buff::new(BuffType::AttackUp, 0.2).team().for_turns(3)],
                },
                Skill {
                    name: "Focus".to_string(),
                    buffs: vec![
                        Buff::new(BuffType::NpDamageUp, 0.3).for_turns(1),
                        Buff::new(BuffType::CardTypeUp, 0.5).on_self().for_turns(1),
                    ],
                },
            ],
        )
    }

    fn template(activations: Vec<SkillActivation>) -> Template {
        Template {
            name: "Test".to_string(),
            party: vec![member("Clearer", Vec::new()), support()],
            turns: vec![TemplateTurn::new(0), TemplateTurn::new(0), TemplateTurn::new(0)],
            activations,
        }
    }

    #[test]
    fn test_team_buff_lasts_its_duration() {
        let t = template(vec![SkillActivation {
            member: 1,
            skill: 0,
            turn: 1,
            target: None,
        }]);
        let planned = t.plan_buffs();

        assert!(planned[0][0].is_empty());
        assert_eq!(planned[1][0].len(), 1);
        assert_eq!(planned[2][0].len(), 1);
        assert_eq!(planned[2][1].len(), 1);
    }

    #[test]
    fn test_targeted_and_self_buffs() {
        let t = template(vec![SkillActivation {
            member: 1,
            skill: 1,
            turn: 0,
            target: Some(0),
        }]);
        let planned = t.plan_buffs();

        assert_eq!(planned[0][0][0].kind, BuffType::NpDamageUp);
        assert_eq!(planned[0][1][0].kind, BuffType::CardTypeUp);
        assert!(planned[1][0].is_empty());
    }

    #[test]
    fn test_invalid_activation_is_ignored() {
        let t = template(vec![SkillActivation {
            member: 5,
            skill: 0,
            turn: 0,
            target: None,
        }]);
        assert!(t.plan_buffs().iter().flatten().all(|b| b.is_empty()));
    }

    #[test]
    fn test_turn_buff_sets_include_planned_and_explicit() {
        let mut t = template(vec![SkillActivation {
            member: 1,
            skill: 0,
            turn: 0,
            target: None,
        }]);
        let explicit = BuffSet {
            np_up: ScaledInt::from_decimal(0.1),
            ..Default::default()
        };
        t.turns[0] = TemplateTurn::new(0).with_buffs(0, explicit);

        let planned = t.plan_buffs();
        let set = BuffSet::combine(&t.turn_buff_sets(&planned, 0, 0, CardType::Arts), None);
        assert_eq!(set.attack_up, ScaledInt::from_decimal(0.2));
        assert_eq!(set.np_up, ScaledInt::from_decimal(0.1));
    }

    #[test]
    fn test_turn_buff_sets_merge_whole_party_row() {
        let mut t = template(Vec::new());
        let granted = BuffSet::from_buffs(&[Buff::new(BuffType::AttackUp, 0.5).team()], CardType::Arts);
        let own = BuffSet::from_buffs(&[Buff::new(BuffType::NpDamageUp, 0.2)], CardType::Arts);
        t.turns[0] = TemplateTurn::new(0)
            .with_buffs(0, own)
            .with_buffs(1, granted)
            .with_buffs(4, BuffSet::from_buffs(&[Buff::new(BuffType::AttackUp, 9.0)], CardType::Arts));

        let planned = t.plan_buffs();
        let set = BuffSet::combine(&t.turn_buff_sets(&planned, 0, 0, CardType::Arts), None);
        assert_eq!(set.attack_up, ScaledInt::from_decimal(0.5));
        assert_eq!(set.np_up, ScaledInt::from_decimal(0.2));

        // Later turns without explicit sets only see planned buffs
        let later = BuffSet::combine(&t.turn_buff_sets(&planned, 1, 0, CardType::Arts), None);
        assert_eq!(later, BuffSet::default());
    }
}
