//! np_core - Noble Phantasm damage and NP refund calculation
//!
//! This library provides:
//! - ScaledInt / Float32Value: Fixed-point and 32-bit float arithmetic
//! - BuffSet: Additive aggregation of the buffs active on a turn
//! - calculate_np: Damage range of one NP cast against one enemy
//! - Refund simulation: Per-hit NP gauge gain including overkill
//! - Node runs: One designated clearer per wave across a multi-wave node

pub mod arith;
pub mod buff;
pub mod config;
pub mod damage;
pub mod error;
pub mod node;
pub mod prelude;
pub mod refund;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use arith::{Float32Value, ScaledInt};
pub use buff::{Buff, BuffSet, BuffType, PowerMod};
pub use config::{default_catalog, Catalog, ConfigError};
pub use damage::{calculate_np, calculate_np_rolled, NpResult, Range};
pub use error::CalcError;
pub use node::{run, Node, NodeDamage, Template};
pub use refund::RefundResult;
pub use types::{Attribute, CardType, NpTarget, ServantClass, Trait};
pub use unit::{CraftEssence, Enemy, NoblePhantasm, Servant, ServantData};
