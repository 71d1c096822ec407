//! Enemy - Target of a Noble Phantasm

use crate::types::{Attribute, ServantClass, Trait};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    #[serde(default)]
    pub name: String,
    pub class: ServantClass,
    pub attribute: Attribute,
    #[serde(default)]
    pub traits: BTreeSet<Trait>,
    pub hit_points: i64,
    /// Enemy grants 20% extra NP gain
    #[serde(default)]
    pub special_np_gain_mod: bool,
}

impl Enemy {
    pub fn new(class: ServantClass, attribute: Attribute, hit_points: i64) -> Self {
        Enemy {
            name: String::new(),
            class,
            attribute,
            traits: BTreeSet::new(),
            hit_points,
            special_np_gain_mod: false,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.insert(t);
        self
    }

    pub fn with_special_np_gain(mut self) -> Self {
        self.special_np_gain_mod = true;
        self
    }

    /// Explicit traits plus the implicit class and attribute traits
    pub fn all_traits(&self) -> BTreeSet<Trait> {
        let mut traits = self.traits.clone();
        traits.insert(Trait::Class(self.class));
        traits.insert(Trait::Attribute(self.attribute));
        traits
    }
}
