//! Well-known chip and field names in `sensors -j` output.
//!
//! These are the canonical lm-sensors labels the extraction layer scans
//! for. Chip names carry a bus suffix (e.g. `coretemp-isa-0000`), so
//! chips are matched by substring, not equality.

/// Substring identifying the Intel core-temperature driver family.
pub const CPU_CHIP_FRAGMENT: &str = "coretemp";

/// Measurement holding the CPU package (whole-die) temperature.
pub const CPU_PACKAGE_MEASUREMENT: &str = "Package id 0";

/// Substring identifying PCI-attached devices (the NIC reports here).
pub const NIC_CHIP_FRAGMENT: &str = "pci";

/// Measurement holding the NIC's primary location sensor.
pub const NIC_LOCATION_MEASUREMENT: &str = "loc1";

/// Field holding the current reading of a temperature measurement.
pub const TEMP_INPUT_FIELD: &str = "temp1_input";
