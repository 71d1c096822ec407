//! Damage system - NP damage formula and multiplier tables

mod calculation;
mod multipliers;
mod result;

pub use calculation::{
    calculate_np, calculate_np_rolled, extra_damage_factor, np_damage_range, random_roll,
    resolve_np_multiplier,
};
pub use multipliers::{
    attribute_multiplier, card_multiplier, class_affinity, class_multiplier, upgrade_bonus,
};
pub use result::{NpResult, Range};

/// Damage formula constants
pub mod constants {
    use super::Range;

    /// Fixed scale applied to every NP
    pub const DAMAGE_SCALE: f64 = 0.23;

    /// Canonical low/average/high random rolls
    pub const ROLLS: Range<f64> = Range::new(0.9, 1.0, 1.099);

    /// Bounds of the random roll in thousandths
    pub const ROLL_MIN: u32 = 900;
    pub const ROLL_MAX: u32 = 1099;

    /// Highest overcharge level index
    pub const MAX_OVERCHARGE: i32 = 4;
}
