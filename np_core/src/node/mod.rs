//! Node runs - one NP cast per enemy per wave across an encounter

mod result;
mod run;
mod template;

pub use result::{EnemyDamage, NodeDamage, WaveDamage};
pub use run::run;
pub use template::{PartyMember, SkillActivation, Template, TemplateTurn};

use crate::unit::Enemy;
use serde::{Deserialize, Serialize};

/// One wave of enemies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    #[serde(default)]
    pub enemies: Vec<Enemy>,
}

impl Wave {
    pub fn new(enemies: Vec<Enemy>) -> Self {
        Wave { enemies }
    }
}

/// A multi-wave encounter with the party that clears it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub waves: Vec<Wave>,
    pub template: Template,
}
