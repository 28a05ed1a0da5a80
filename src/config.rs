//! # Configuration
//!
//! File-based configuration for a simulation run. Two fields drive the
//! whole pipeline:
//!
//! - `stations`: map from station identifier to the message it
//!   transmits. Enumeration order is the sorted key order.
//! - `bit_size`: a single power-of-two integer used both as the Walsh
//!   matrix order (code length) and as the per-character bit width.
//!   The dual use is deliberate and part of the observable contract.
//!
//! Files are parsed as YAML, which also accepts plain JSON:
//!
//! ```yaml
//! bit_size: 8
//! stations:
//!   A: "GOD"
//!   B: "CAT"
//!   C: "HAM"
//!   D: "SUN"
//! ```

use crate::error::{CdmaError, CdmaResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Complete simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Station identifier → message to transmit.
    pub stations: BTreeMap<String, String>,
    /// Walsh matrix order and per-character bit width.
    pub bit_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            stations: BTreeMap::new(),
            bit_size: 8,
        }
    }
}

impl SimConfig {
    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> CdmaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a YAML (or JSON) string.
    pub fn parse(content: &str) -> CdmaResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CdmaError::MalformedConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the pipeline relies on.
    ///
    /// `bit_size` must be a positive power of two and large enough to
    /// hand every station its own code.
    pub fn validate(&self) -> CdmaResult<()> {
        if self.stations.is_empty() {
            return Err(CdmaError::MalformedConfig(
                "at least one station is required".to_string(),
            ));
        }
        if self.bit_size == 0 || !self.bit_size.is_power_of_two() {
            return Err(CdmaError::MalformedConfig(format!(
                "bit_size must be a positive power of two, got {}",
                self.bit_size
            )));
        }
        Ok(())
    }

    /// Station identifiers in enumeration order.
    pub fn station_names(&self) -> Vec<String> {
        self.stations.keys().cloned().collect()
    }

    /// Generate an example configuration file.
    pub fn example_yaml() -> String {
        let config = Self {
            stations: [("A", "GOD"), ("B", "CAT"), ("C", "HAM"), ("D", "SUN")]
                .iter()
                .map(|(station, message)| (station.to_string(), message.to_string()))
                .collect(),
            bit_size: 8,
        };
        serde_yaml::to_string(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bit_size: 8
stations:
  A: "GOD"
  B: "CAT"
"#;
        let config = SimConfig::parse(yaml).unwrap();
        assert_eq!(config.bit_size, 8);
        assert_eq!(config.stations["A"], "GOD");
        assert_eq!(config.station_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"bit_size": 8, "stations": {"X": "HI"}}"#;
        let config = SimConfig::parse(json).unwrap();
        assert_eq!(config.bit_size, 8);
        assert_eq!(config.stations["X"], "HI");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = SimConfig::parse("stations:\n  A: \"HI\"\n").unwrap_err();
        assert!(matches!(err, CdmaError::MalformedConfig(_)));
    }

    #[test]
    fn test_rejects_bad_bit_size() {
        for bit_size in ["0", "3", "12"] {
            let yaml = format!("bit_size: {bit_size}\nstations:\n  A: \"HI\"\n");
            assert!(
                SimConfig::parse(&yaml).is_err(),
                "bit_size {bit_size} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_stations() {
        let err = SimConfig::parse("bit_size: 8\nstations: {}\n").unwrap_err();
        assert!(matches!(err, CdmaError::MalformedConfig(_)));
    }

    #[test]
    fn test_example_yaml_parses() {
        let yaml = SimConfig::example_yaml();
        let config = SimConfig::parse(&yaml).unwrap();
        assert_eq!(config.stations.len(), 4);
        assert_eq!(config.bit_size, 8);
    }
}
