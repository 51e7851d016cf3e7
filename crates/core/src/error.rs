//! Error taxonomy for sensor acquisition.
//!
//! [`AcquisitionError`] is the only error the engine can raise, and it is
//! fully contained inside [`crate::thermal::TemperatureMonitor::evaluate`]:
//! it never crosses the crate's public evaluation boundary. Extraction,
//! reduction, classification, and code mapping are total functions.

/// A failed attempt to capture a sensor snapshot.
///
/// One attempt per evaluation; there is no retry, so every variant maps
/// to the same caller behaviour (degrade to the "temperature unknown"
/// result).
#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    /// The sensor command could not be spawned or its I/O failed.
    #[error("Sensor command I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sensor command exceeded the acquisition timeout and was killed.
    #[error("Sensor command timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// The sensor command ran but exited non-zero.
    #[error("Sensor command exited with code {exit_code}: {stderr}")]
    CommandFailed { exit_code: i32, stderr: String },

    /// Stdout was not a valid JSON sensor snapshot.
    #[error("Sensor output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
