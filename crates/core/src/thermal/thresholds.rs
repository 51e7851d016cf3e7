//! Warning / critical temperature boundaries.

use serde::Serialize;

/// Default warning threshold in °C.
pub const DEFAULT_WARNING: f64 = 70.0;

/// Default critical threshold in °C.
pub const DEFAULT_CRITICAL: f64 = 80.0;

/// The pair of classification boundaries, in degrees Celsius.
///
/// Constructed once at process start from environment configuration and
/// read-only thereafter. `warning < critical` is expected but NOT
/// enforced here -- callers must not assume it has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Thresholds {
    pub fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_WARNING, DEFAULT_CRITICAL)
    }
}
