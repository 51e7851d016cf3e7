//! tempcheck-core -- the sensor acquisition and classification engine.
//!
//! Everything with decision logic lives here: invoking the host's
//! `lm-sensors` facility, parsing its JSON output, extracting the CPU
//! package and NIC temperatures, reducing them to one representative
//! value, and classifying that value against configured thresholds.
//!
//! The crate has no HTTP dependencies. The API layer consumes exactly
//! two things: [`thermal::TemperatureMonitor::evaluate`] and the
//! [`thermal::TempStatus::http_status`] mapping.

pub mod error;
pub mod sensors;
pub mod thermal;
pub mod types;
