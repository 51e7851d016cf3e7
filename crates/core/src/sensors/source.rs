//! Sensor data sources.
//!
//! [`SensorSource`] is the seam between the evaluation pipeline and the
//! host: production uses [`LmSensors`] (the lm-sensors CLI in JSON mode),
//! tests substitute canned snapshots. One acquisition per call, bounded
//! by a fixed timeout -- no retry, no backoff, no caching.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::AcquisitionError;

use super::snapshot::SensorSnapshot;

/// Maximum wall-clock time for one sensor invocation.
pub const ACQUISITION_TIMEOUT: Duration = Duration::from_secs(5);

/// Something that can capture a fresh [`SensorSnapshot`].
#[async_trait]
pub trait SensorSource: Send + Sync {
    /// Capture a snapshot of all sensor chips on the host.
    ///
    /// Exactly one attempt. Timeouts, non-zero exits, and unparsable
    /// output all surface as [`AcquisitionError`] -- never as a
    /// partially-valid snapshot.
    async fn acquire(&self) -> Result<SensorSnapshot, AcquisitionError>;
}

/// Production source: invokes `sensors -j` and parses its stdout.
pub struct LmSensors {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl LmSensors {
    /// The standard `sensors -j` invocation with the default timeout.
    pub fn new() -> Self {
        Self::with_command("sensors", ["-j"], ACQUISITION_TIMEOUT)
    }

    /// Run an arbitrary command as the sensor source.
    ///
    /// Used by tests to exercise the failure paths with shell fixtures.
    pub fn with_command<I, S>(program: impl Into<String>, args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout,
        }
    }
}

impl Default for LmSensors {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorSource for LmSensors {
    async fn acquire(&self) -> Result<SensorSnapshot, AcquisitionError> {
        let start = Instant::now();

        // `kill_on_drop(true)` ensures the child is reaped when the
        // timeout drops the wait future.
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(AcquisitionError::Io)?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_elapsed| AcquisitionError::Timeout {
                elapsed_ms: start.elapsed().as_millis() as u64,
            })?
            .map_err(AcquisitionError::Io)?;

        if !output.status.success() {
            return Err(AcquisitionError::CommandFailed {
                exit_code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(AcquisitionError::Parse)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
