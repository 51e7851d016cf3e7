//! Pure extraction of the CPU and NIC readings from a snapshot.
//!
//! Both functions are deterministic, never fail, and express absence via
//! the [`UNKNOWN_TEMPERATURE`] sentinel -- a host without the sought chip
//! is a normal outcome at this layer, not an error.

use crate::thermal::UNKNOWN_TEMPERATURE;

use super::labels::{
    CPU_CHIP_FRAGMENT, CPU_PACKAGE_MEASUREMENT, NIC_CHIP_FRAGMENT, NIC_LOCATION_MEASUREMENT,
    TEMP_INPUT_FIELD,
};
use super::snapshot::SensorSnapshot;

/// CPU package temperature in °C, rounded to one decimal place.
///
/// Returns [`UNKNOWN_TEMPERATURE`] when no coretemp chip reports a
/// package reading.
pub fn cpu_temperature(snapshot: &SensorSnapshot) -> f64 {
    snapshot
        .numeric_field(CPU_CHIP_FRAGMENT, CPU_PACKAGE_MEASUREMENT, TEMP_INPUT_FIELD)
        .map(round_to_tenth)
        .unwrap_or(UNKNOWN_TEMPERATURE)
}

/// NIC temperature in °C, rounded to one decimal place.
///
/// Returns [`UNKNOWN_TEMPERATURE`] when no PCI-attached chip reports a
/// `loc1` reading.
pub fn nic_temperature(snapshot: &SensorSnapshot) -> f64 {
    snapshot
        .numeric_field(NIC_CHIP_FRAGMENT, NIC_LOCATION_MEASUREMENT, TEMP_INPUT_FIELD)
        .map(round_to_tenth)
        .unwrap_or(UNKNOWN_TEMPERATURE)
}

/// Round to one decimal place: 72.34 -> 72.3.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
