//! Node run - evaluate the designated clearer against every wave

use super::result::{EnemyDamage, NodeDamage, WaveDamage};
use super::{Node, Wave};
use crate::buff::{Buff, BuffSet};
use crate::damage::calculate_np;
use crate::error::CalcError;

/// Calculate every wave of a node
///
/// Waves are independent: no NP gauge carries over. A failing wave or enemy
/// is reported in its own slot without stopping the rest.
pub fn run(node: &Node) -> NodeDamage {
    let planned = node.template.plan_buffs();

    let waves = node
        .waves
        .iter()
        .enumerate()
        .map(|(index, wave)| {
            let result = run_wave(node, &planned, index, wave);
            if let Err(err) = &result {
                tracing::warn!("{} wave {}: {}", node.name, index + 1, err);
            }
            result
        })
        .collect();

    NodeDamage {
        name: node.name.clone(),
        waves,
    }
}

fn run_wave(
    node: &Node,
    planned: &[Vec<Vec<Buff>>],
    index: usize,
    wave: &Wave,
) -> Result<WaveDamage, CalcError> {
    let template = &node.template;
    let turn = template
        .turns
        .get(index)
        .ok_or(CalcError::MissingTurn { wave: index })?;
    let member = template
        .party
        .get(turn.clearer)
        .ok_or(CalcError::ClearerOutOfRange {
            wave: index,
            clearer: turn.clearer,
            party_size: template.party.len(),
        })?;

    let np = member.servant.data.np_for(turn.card_type)?;
    let mut buff_sets = template.turn_buff_sets(planned, index, turn.clearer, np.card_type);
    if let Some(item) = &member.held_item {
        buff_sets.push(BuffSet::combine(&[], Some(item.clone())));
    }

    tracing::debug!(
        "{} wave {}: {} casts {} against {} enemies",
        node.name,
        index + 1,
        member.servant.data.name,
        np.card_type,
        wave.enemies.len()
    );

    let enemies = wave
        .enemies
        .iter()
        .map(|enemy| {
            let result = calculate_np(
                &member.servant,
                member.craft_essence.as_ref(),
                enemy,
                &buff_sets,
                turn.card_type,
            );
            if let Err(err) = &result {
                tracing::warn!("{} wave {} vs {}: {}", node.name, index + 1, enemy.name, err);
            }
            EnemyDamage {
                enemy: enemy.name.clone(),
                hit_points: enemy.hit_points,
                result,
            }
        })
        .collect();

    Ok(WaveDamage::new(member.servant.data.name.clone(), enemies))
}
