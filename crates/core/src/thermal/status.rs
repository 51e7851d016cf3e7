//! Status taxonomy and the status-to-HTTP-code mapping.

use serde::{Deserialize, Serialize};

use super::{Thresholds, UNKNOWN_TEMPERATURE};

/// Severity of one temperature evaluation.
///
/// Serialized UPPERCASE for monitoring dashboards. Evaluation only ever
/// produces `Ok`, `Warning`, `Critical`, or `Error`; `Starting` is
/// reserved for pre-first-evaluation states and never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TempStatus {
    Starting,
    Ok,
    Warning,
    Critical,
    Error,
}

impl TempStatus {
    /// HTTP status code reported to the uptime monitor.
    ///
    /// 418 for warnings is deliberate: it is distinct from both success
    /// and server-error classes, so the monitor can show "degraded"
    /// without marking the host down. `Starting` maps to 404 as a
    /// defensive default -- observing it in a response signals a
    /// classification defect.
    pub fn http_status(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Warning => 418,
            Self::Critical => 503,
            Self::Error => 500,
            Self::Starting => 404,
        }
    }
}

/// Classify a reduced temperature against the thresholds.
///
/// Total over all real inputs. The sentinel check precedes the threshold
/// comparisons so a zero reading is never classified as healthy, whatever
/// the thresholds are.
pub fn classify(temperature: f64, thresholds: &Thresholds) -> TempStatus {
    if temperature == UNKNOWN_TEMPERATURE {
        TempStatus::Error
    } else if temperature >= thresholds.critical {
        TempStatus::Critical
    } else if temperature >= thresholds.warning {
        TempStatus::Warning
    } else {
        TempStatus::Ok
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
