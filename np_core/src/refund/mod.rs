//! NP refund - gauge gain per hit, including overkill bonus

mod gain;
mod overkill;

pub use gain::{enemy_server_mod, np_gain_weight, overkill_refund_per_hit, refund_per_hit};
pub use overkill::{
    distribute_hits, simulate_hits, simulate_refund, simulate_refund_range, total_refund_units,
    RefundResult,
};

/// Raw [`crate::arith::ScaledInt`] units per refund unit
///
/// Refunds are computed in hundredths of a percent of NP gauge and exposed
/// as a `ScaledInt` percentage (10.5% gauge has value `10.5`).
pub const GAUGE_UNIT_RAW: i64 = 10;
