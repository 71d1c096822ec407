//! CraftEssence - Equipped item granting attack and buffs

use crate::buff::Buff;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftEssence {
    pub name: String,
    #[serde(default)]
    pub attack_stat: u32,
    #[serde(default)]
    pub buffs: Vec<Buff>,
}

impl CraftEssence {
    pub fn new(name: &str, attack_stat: u32) -> Self {
        CraftEssence {
            name: name.to_string(),
            attack_stat,
            buffs: Vec::new(),
        }
    }

    pub fn with_buff(mut self, buff: Buff) -> Self {
        self.buffs.push(buff);
        self
    }
}
