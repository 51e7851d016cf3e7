//! Typed view over the raw `sensors -j` document.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One parsed `sensors -j` snapshot: chip name -> measurement name ->
/// field name -> value.
///
/// The document is only loosely structured -- chips carry non-measurement
/// entries too (e.g. `"Adapter": "ISA adapter"` as a bare string), so the
/// inner levels stay as [`Value`] and every lookup is explicitly optional.
/// Missing keys are `None`, never an error: absence of a chip is a normal
/// outcome on hosts without that hardware.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SensorSnapshot {
    chips: Map<String, Value>,
}

impl SensorSnapshot {
    /// Look up a numeric field by (chip substring, measurement, field).
    ///
    /// Scans chips whose name contains `chip_fragment` and returns the
    /// first numeric value found at `measurement.field`. A matching chip
    /// that lacks the measurement or field does not stop the scan.
    /// Deterministic for a given snapshot (chips are kept in a sorted map).
    pub fn numeric_field(
        &self,
        chip_fragment: &str,
        measurement: &str,
        field: &str,
    ) -> Option<f64> {
        self.chips
            .iter()
            .filter(|(name, _)| name.contains(chip_fragment))
            .find_map(|(_, chip)| chip.get(measurement)?.get(field)?.as_f64())
    }

    /// Number of chips in the snapshot.
    pub fn chip_count(&self) -> usize {
        self.chips.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: serde_json::Value) -> SensorSnapshot {
        serde_json::from_value(json).expect("fixture must be a JSON object")
    }

    #[test]
    fn finds_numeric_field_through_all_three_levels() {
        let snap = snapshot(serde_json::json!({
            "coretemp-isa-0000": {
                "Adapter": "ISA adapter",
                "Package id 0": { "temp1_input": 54.0, "temp1_max": 80.0 }
            }
        }));

        assert_eq!(
            snap.numeric_field("coretemp", "Package id 0", "temp1_input"),
            Some(54.0)
        );
    }

    #[test]
    fn missing_chip_measurement_or_field_is_none() {
        let snap = snapshot(serde_json::json!({
            "coretemp-isa-0000": {
                "Package id 0": { "temp1_input": 54.0 }
            }
        }));

        assert_eq!(snap.numeric_field("nvme", "Composite", "temp1_input"), None);
        assert_eq!(snap.numeric_field("coretemp", "Core 0", "temp1_input"), None);
        assert_eq!(
            snap.numeric_field("coretemp", "Package id 0", "temp1_crit"),
            None
        );
    }

    #[test]
    fn string_valued_entries_do_not_break_lookup() {
        // "Adapter" is a bare string; asking for a field under it must
        // yield None, not a panic.
        let snap = snapshot(serde_json::json!({
            "coretemp-isa-0000": { "Adapter": "ISA adapter" }
        }));

        assert_eq!(snap.numeric_field("coretemp", "Adapter", "temp1_input"), None);
    }

    #[test]
    fn scan_continues_past_matching_chip_without_the_field() {
        // Two coretemp chips; only the second carries the package reading.
        let snap = snapshot(serde_json::json!({
            "coretemp-isa-0000": { "Core 0": { "temp2_input": 48.0 } },
            "coretemp-isa-0001": { "Package id 0": { "temp1_input": 51.5 } }
        }));

        assert_eq!(
            snap.numeric_field("coretemp", "Package id 0", "temp1_input"),
            Some(51.5)
        );
    }

    #[test]
    fn non_numeric_field_value_is_none() {
        let snap = snapshot(serde_json::json!({
            "coretemp-isa-0000": {
                "Package id 0": { "temp1_input": "broken" }
            }
        }));

        assert_eq!(
            snap.numeric_field("coretemp", "Package id 0", "temp1_input"),
            None
        );
    }

    #[test]
    fn empty_document_parses_to_zero_chips() {
        let snap = snapshot(serde_json::json!({}));
        assert_eq!(snap.chip_count(), 0);
    }
}
