//! Core enums shared by every calculation stage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Servant or enemy class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServantClass {
    Shielder,
    Saber,
    Archer,
    Lancer,
    Rider,
    Caster,
    Assassin,
    Berserker,
    Ruler,
    Avenger,
    MoonCancer,
    AlterEgo,
    Foreigner,
    Pretender,
    Beast,
    // Enemy-only classes
    Knight,
    Cavalry,
    Neutral,
}

impl ServantClass {
    /// Get all classes
    pub fn all() -> &'static [ServantClass] {
        &[
            ServantClass::Shielder,
            ServantClass::Saber,
            ServantClass::Archer,
            ServantClass::Lancer,
            ServantClass::Rider,
            ServantClass::Caster,
            ServantClass::Assassin,
            ServantClass::Berserker,
            ServantClass::Ruler,
            ServantClass::Avenger,
            ServantClass::MoonCancer,
            ServantClass::AlterEgo,
            ServantClass::Foreigner,
            ServantClass::Pretender,
            ServantClass::Beast,
            ServantClass::Knight,
            ServantClass::Cavalry,
            ServantClass::Neutral,
        ]
    }

    /// Snake-case name, identical to the serialized form
    pub fn name(self) -> &'static str {
        match self {
            ServantClass::Shielder => "shielder",
            ServantClass::Saber => "saber",
            ServantClass::Archer => "archer",
            ServantClass::Lancer => "lancer",
            ServantClass::Rider => "rider",
            ServantClass::Caster => "caster",
            ServantClass::Assassin => "assassin",
            ServantClass::Berserker => "berserker",
            ServantClass::Ruler => "ruler",
            ServantClass::Avenger => "avenger",
            ServantClass::MoonCancer => "moon_cancer",
            ServantClass::AlterEgo => "alter_ego",
            ServantClass::Foreigner => "foreigner",
            ServantClass::Pretender => "pretender",
            ServantClass::Beast => "beast",
            ServantClass::Knight => "knight",
            ServantClass::Cavalry => "cavalry",
            ServantClass::Neutral => "neutral",
        }
    }

    /// Parse a snake-case class name
    pub fn from_name(name: &str) -> Option<ServantClass> {
        ServantClass::all().iter().copied().find(|c| c.name() == name)
    }

    /// Classes exempt from the Ruler defender penalty
    pub fn is_extra(self) -> bool {
        matches!(
            self,
            ServantClass::Ruler
                | ServantClass::Avenger
                | ServantClass::MoonCancer
                | ServantClass::AlterEgo
                | ServantClass::Foreigner
                | ServantClass::Pretender
                | ServantClass::Shielder
        )
    }

    /// Saber, Archer, Lancer and the enemy-only Knight class
    pub fn is_knight(self) -> bool {
        matches!(
            self,
            ServantClass::Saber | ServantClass::Archer | ServantClass::Lancer | ServantClass::Knight
        )
    }

    /// Rider, Caster, Assassin and the enemy-only Cavalry class
    pub fn is_cavalry(self) -> bool {
        matches!(
            self,
            ServantClass::Rider
                | ServantClass::Caster
                | ServantClass::Assassin
                | ServantClass::Cavalry
        )
    }
}

impl fmt::Display for ServantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hidden attribute used by the attribute triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Man,
    Sky,
    Earth,
    Star,
    Beast,
    Neutral,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Man,
            Attribute::Sky,
            Attribute::Earth,
            Attribute::Star,
            Attribute::Beast,
            Attribute::Neutral,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Man => "man",
            Attribute::Sky => "sky",
            Attribute::Earth => "earth",
            Attribute::Star => "star",
            Attribute::Beast => "beast",
            Attribute::Neutral => "neutral",
        }
    }

    pub fn from_name(name: &str) -> Option<Attribute> {
        Attribute::all().iter().copied().find(|a| a.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Command card type of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Buster,
    Arts,
    Quick,
    Extra,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardType::Buster => "buster",
            CardType::Arts => "arts",
            CardType::Quick => "quick",
            CardType::Extra => "extra",
        };
        f.write_str(name)
    }
}

/// Who a Noble Phantasm hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpTarget {
    /// Single enemy
    Single,
    /// All enemies
    Aoe,
    /// No damage
    Support,
}

/// Tag used for trigger matching
///
/// Serialized as a string: `"always"`, `"class:<name>"`, `"attribute:<name>"`,
/// or any other lower-cased tag such as `"dragon"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Trait {
    /// Matches every enemy
    Always,
    Class(ServantClass),
    Attribute(Attribute),
    Tag(String),
}

impl Trait {
    /// Create a free-form tag
    pub fn tag(name: &str) -> Self {
        Trait::Tag(name.trim().to_lowercase())
    }
}

impl TryFrom<String> for Trait {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();
        if value == "always" {
            return Ok(Trait::Always);
        }
        if let Some(name) = value.strip_prefix("class:") {
            return ServantClass::from_name(name)
                .map(Trait::Class)
                .ok_or_else(|| format!("unknown class trait: {}", name));
        }
        if let Some(name) = value.strip_prefix("attribute:") {
            return Attribute::from_name(name)
                .map(Trait::Attribute)
                .ok_or_else(|| format!("unknown attribute trait: {}", name));
        }
        if value.is_empty() {
            return Err("empty trait".to_string());
        }
        Ok(Trait::Tag(value))
    }
}

impl From<Trait> for String {
    fn from(value: Trait) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trait::Always => f.write_str("always"),
            Trait::Class(class) => write!(f, "class:{}", class),
            Trait::Attribute(attribute) => write!(f, "attribute:{}", attribute),
            Trait::Tag(tag) => f.write_str(tag),
        }
    }
}
