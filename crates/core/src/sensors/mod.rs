//! Sensor snapshot acquisition and temperature extraction.
//!
//! A snapshot is the full JSON document emitted by one `sensors -j`
//! invocation. [`source::SensorSource`] is the acquisition seam (the
//! production implementation shells out to lm-sensors; tests substitute
//! canned data), [`snapshot::SensorSnapshot`] is the typed view over the
//! nested chip/measurement/field mapping, and [`extract`] pulls the two
//! readings this service cares about out of it.

pub mod extract;
pub mod labels;
pub mod snapshot;
pub mod source;

pub use snapshot::SensorSnapshot;
pub use source::{LmSensors, SensorSource};
