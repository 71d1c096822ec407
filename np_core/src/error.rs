//! Calculation errors

use crate::types::CardType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single calculation unit (one enemy, one wave)
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalcError {
    #[error("{servant} has no attack stat for level {level}")]
    MissingAttackStat { servant: String, level: u32 },
    #[error("{servant} has no {card_type} Noble Phantasm")]
    NoNoblePhantasm { servant: String, card_type: CardType },
    #[error("{servant} has no Noble Phantasm at all")]
    NoNoblePhantasms { servant: String },
    #[error("NP level {np_level} is out of range for {servant} (expected 1-5)")]
    InvalidNpLevel { servant: String, np_level: u8 },
    #[error("wave {wave}: clearer index {clearer} is outside a party of {party_size}")]
    ClearerOutOfRange {
        wave: usize,
        clearer: usize,
        party_size: usize,
    },
    #[error("wave {wave} has no template turn")]
    MissingTurn { wave: usize },
    #[error("Unknown servant: {0}")]
    UnknownServant(String),
    #[error("Unknown craft essence: {0}")]
    UnknownCraftEssence(String),
    #[error("Unknown enemy: {0}")]
    UnknownEnemy(String),
}
