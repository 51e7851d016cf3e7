//! The per-request evaluation entry point.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::sensors::{extract, SensorSource};
use crate::types::Timestamp;

use super::status::{classify, TempStatus};
use super::{reduce, Thresholds, UNKNOWN_TEMPERATURE};

/// The result of one temperature evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct TempReading {
    /// Reduced temperature in °C; [`UNKNOWN_TEMPERATURE`] when no reading
    /// could be obtained.
    pub temperature: f64,
    /// Classification of the reading.
    pub status: TempStatus,
    /// When the evaluation completed (UTC).
    pub timestamp: Timestamp,
}

/// On-demand temperature evaluator.
///
/// Holds the process-wide thresholds and the sensor source; both are
/// read-only after construction, so the monitor is freely shareable
/// across concurrent requests. Each [`evaluate`](Self::evaluate) call
/// pays for its own fresh sensor read -- there is no cache and no
/// deduplication of concurrent calls.
pub struct TemperatureMonitor {
    thresholds: Thresholds,
    source: Arc<dyn SensorSource>,
}

impl TemperatureMonitor {
    pub fn new(thresholds: Thresholds, source: Arc<dyn SensorSource>) -> Self {
        Self { thresholds, source }
    }

    /// The active thresholds (echoed in HTTP response bodies).
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Run one evaluation: acquire, extract, reduce, classify.
    ///
    /// Never fails. Acquisition errors are contained here: they are
    /// logged and degrade to an `Error` reading with the sentinel
    /// temperature, so the request path stays available even when the
    /// sensors cannot be read.
    pub async fn evaluate(&self) -> TempReading {
        let snapshot = match self.source.acquire().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "Sensor acquisition failed");
                return TempReading {
                    temperature: UNKNOWN_TEMPERATURE,
                    status: TempStatus::Error,
                    timestamp: Utc::now(),
                };
            }
        };

        let cpu = extract::cpu_temperature(&snapshot);
        let nic = extract::nic_temperature(&snapshot);
        let temperature = reduce(cpu, nic);
        let status = classify(temperature, &self.thresholds);

        TempReading {
            temperature,
            status,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
