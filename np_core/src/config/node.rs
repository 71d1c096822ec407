//! Node configuration - party and waves by catalog name

use super::{Catalog, ConfigError};
use crate::buff::PowerMod;
use crate::error::CalcError;
use crate::node::{Node, PartyMember, SkillActivation, Template, TemplateTurn, Wave};
use crate::unit::Servant;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_np_level() -> u8 {
    1
}

/// A party slot referring to catalog entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberConfig {
    pub servant: String,
    pub level: u32,
    #[serde(default = "default_np_level")]
    pub np_level: u8,
    #[serde(default)]
    pub fou_attack: u32,
    #[serde(default)]
    pub np_upgraded: bool,
    #[serde(default)]
    pub craft_essence: Option<String>,
    #[serde(default)]
    pub held_item: Option<PowerMod>,
}

impl MemberConfig {
    pub fn resolve(&self, catalog: &Catalog) -> Result<PartyMember, CalcError> {
        let mut servant = Servant::new(catalog.servant(&self.servant)?.clone(), self.level)
            .with_np_level(self.np_level)
            .with_fou(self.fou_attack);
        servant.np_upgraded = self.np_upgraded;

        let craft_essence = self
            .craft_essence
            .as_deref()
            .map(|name| catalog.craft_essence(name).cloned())
            .transpose()?;

        Ok(PartyMember {
            servant,
            craft_essence,
            held_item: self.held_item.clone(),
        })
    }
}

/// A node as written in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    /// Enemy names per wave
    pub waves: Vec<Vec<String>>,
    #[serde(default)]
    pub template_name: String,
    pub party: Vec<MemberConfig>,
    #[serde(default)]
    pub turns: Vec<TemplateTurn>,
    #[serde(default)]
    pub activations: Vec<SkillActivation>,
}

impl NodeConfig {
    /// Look every name up in the catalog
    pub fn resolve(&self, catalog: &Catalog) -> Result<Node, CalcError> {
        let waves = self
            .waves
            .iter()
            .map(|names| {
                names
                    .iter()
                    .map(|name| catalog.enemy(name).cloned())
                    .collect::<Result<Vec<_>, _>>()
                    .map(Wave::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let party = self
            .party
            .iter()
            .map(|member| member.resolve(catalog))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Node {
            name: self.name.clone(),
            waves,
            template: Template {
                name: self.template_name.clone(),
                party,
                turns: self.turns.clone(),
                activations: self.activations.clone(),
            },
        })
    }
}

/// Load a node from a TOML file and resolve it
pub fn load_node(path: &Path, catalog: &Catalog) -> Result<Node, ConfigError> {
    let config: NodeConfig = super::load_toml(path)?;
    config
        .resolve(catalog)
        .map_err(|err| ConfigError::ValidationError(err.to_string()))
}

/// Load a node from a TOML string and resolve it
pub fn parse_node(content: &str, catalog: &Catalog) -> Result<Node, ConfigError> {
    let config: NodeConfig = super::parse_toml(content)?;
    config
        .resolve(catalog)
        .map_err(|err| ConfigError::ValidationError(err.to_string()))
}
