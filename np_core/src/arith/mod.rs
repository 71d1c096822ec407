//! Fixed-point arithmetic
//!
//! Percentages and rates are stored as [`ScaledInt`] (exact integer sums,
//! floor on multiply). Multiplicative damage chains are carried in
//! [`Float32Value`], which rounds to 32-bit precision after every step.

mod float32;
mod scaled;

pub use float32::Float32Value;
pub use scaled::{ScaledInt, SCALE};
