//! Prelude module for convenient imports
//!
//! ```rust
//! use np_core::prelude::*;
//! ```

// Arithmetic
pub use crate::arith::{Float32Value, ScaledInt};

// Core types
pub use crate::types::{Attribute, CardType, NpTarget, ServantClass, Trait};
pub use crate::unit::{CraftEssence, Enemy, NoblePhantasm, Servant, ServantData, Skill};

// Buffs
pub use crate::buff::{Buff, BuffSet, BuffType, PowerMod};

// Damage and refund
pub use crate::damage::{calculate_np, calculate_np_rolled, NpResult, Range};
pub use crate::refund::RefundResult;

// Node runs
pub use crate::node::{run, Node, NodeDamage, PartyMember, Template, TemplateTurn, Wave};

// Config
pub use crate::config::{default_catalog, parse_node, Catalog};
pub use crate::error::CalcError;
