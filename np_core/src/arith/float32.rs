//! Float32Value - Single-precision rounding after every step

/// A value rounded to 32-bit float precision after each operation
///
/// Each step computes in double precision and rounds the result to the
/// nearest `f32`, which is what the game client does.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Float32Value(f32);

impl Float32Value {
    /// Round a value to 32-bit precision
    pub fn new(value: f64) -> Self {
        Float32Value(value as f32)
    }

    /// Multiply, then round
    pub fn times(self, multiplier: f64) -> Self {
        Float32Value::new(f64::from(self.0) * multiplier)
    }

    /// Add, then round
    pub fn plus(self, addend: f64) -> Self {
        Float32Value::new(f64::from(self.0) + addend)
    }

    pub fn value(self) -> f64 {
        f64::from(self.0)
    }

    /// Final integer result
    pub fn floor(self) -> i64 {
        self.0.floor() as i64
    }
}
