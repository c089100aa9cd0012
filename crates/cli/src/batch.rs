//! Batch statistics reported after a run.

use serde::Serialize;

/// Counts and timing for one batch conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    /// Standalone documents converted.
    pub standalone: usize,
    /// Fragments converted.
    pub fragments: usize,
    /// Total documents converted.
    pub total: usize,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: f64,
}

impl BatchStats {
    /// Serializes the stats as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_keys() {
        let stats = BatchStats {
            standalone: 2,
            fragments: 1,
            total: 3,
            processing_time_ms: 1.5,
        };
        let json = stats.to_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["standalone"], 2);
        assert_eq!(value["fragments"], 1);
        assert_eq!(value["total"], 3);
        assert_eq!(value["processingTimeMs"], 1.5);
    }

    #[test]
    fn non_finite_time_serializes_as_null() {
        let stats = BatchStats {
            processing_time_ms: f64::NAN,
            ..BatchStats::default()
        };
        let json = stats.to_json().expect("serialize");
        assert!(json.contains("\"processingTimeMs\":null"), "{json}");
    }
}
