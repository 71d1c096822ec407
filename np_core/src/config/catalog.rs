//! Catalog - Servants, craft essences and enemies by name

use super::ConfigError;
use crate::error::CalcError;
use crate::unit::{CraftEssence, Enemy, ServantData};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Static game data the calculations read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub servants: Vec<ServantData>,
    #[serde(default)]
    pub craft_essences: Vec<CraftEssence>,
    #[serde(default)]
    pub enemies: Vec<Enemy>,
}

impl Catalog {
    pub fn servant(&self, name: &str) -> Result<&ServantData, CalcError> {
        self.servants
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CalcError::UnknownServant(name.to_string()))
    }

    pub fn craft_essence(&self, name: &str) -> Result<&CraftEssence, CalcError> {
        self.craft_essences
            .iter()
            .find(|ce| ce.name == name)
            .ok_or_else(|| CalcError::UnknownCraftEssence(name.to_string()))
    }

    pub fn enemy(&self, name: &str) -> Result<&Enemy, CalcError> {
        self.enemies
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| CalcError::UnknownEnemy(name.to_string()))
    }

    /// Check names are unique and every NP's hit distribution sums to 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique("servant", self.servants.iter().map(|s| s.name.as_str()))?;
        check_unique("craft essence", self.craft_essences.iter().map(|ce| ce.name.as_str()))?;
        check_unique("enemy", self.enemies.iter().map(|e| e.name.as_str()))?;

        for servant in &self.servants {
            for np in &servant.nps {
                np.validate()
                    .map_err(|msg| ConfigError::ValidationError(format!("{}: {}", servant.name, msg)))?;
            }
        }
        Ok(())
    }
}

fn check_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::ValidationError(format!("duplicate {} '{}'", kind, name)));
        }
    }
    Ok(())
}

/// Load and validate a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::load_toml(path)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load and validate a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::parse_toml(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load and validate a catalog from a JSON string
pub fn parse_catalog_json(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = super::parse_json(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Get the bundled catalog
pub fn default_catalog() -> Catalog {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml).unwrap_or_else(|err| {
        tracing::warn!("Bundled catalog failed to load: {}", err);
        Catalog::default()
    })
}
