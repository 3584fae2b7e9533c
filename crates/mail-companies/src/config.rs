//! Extraction configuration.
//!
//! Everything that was heuristic about the extraction lives here as data:
//! the literal repairs applied before parsing, the exclusion predicates, the
//! element selector, and the mail file suffix. The defaults reproduce the
//! job-alert cleanup; a JSON file with the same shape can replace any field.

use crate::error::{Result, TallyError};
use crate::filter::{job_alert_exclusions, Exclusion};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A literal substitution applied to raw message text before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repair {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

impl Repair {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Remove `pattern` wherever it occurs.
    pub fn strip(pattern: impl Into<String>) -> Self {
        Self::new(pattern, "")
    }
}

/// Quoted-printable soft line breaks (`=` + newline) split words and tags in
/// the HTML part of the messages. The two tag-specific forms also drop the
/// remains of a `</span>` or `<span>` that a soft break cut in half.
pub fn default_repairs() -> Vec<Repair> {
    vec![
        Repair::strip("=\n"),
        Repair::strip("<=\n/span>"),
        Repair::strip("=\nspan>"),
    ]
}

/// Extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Suffix a file name must end with to be read (e.g. `.emlx`).
    pub extension: String,
    /// CSS selector for the elements whose text is collected.
    pub selector: String,
    /// Literal repairs; longer patterns win over shorter overlapping ones.
    pub repairs: Vec<Repair>,
    /// A fragment matching any of these is not counted.
    pub exclusions: Vec<Exclusion>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extension: ".emlx".to_string(),
            selector: "span".to_string(),
            repairs: default_repairs(),
            exclusions: job_alert_exclusions(),
        }
    }
}

impl ExtractorConfig {
    /// Read a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| TallyError::io(path, e))?;
        Self::from_json(&data)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.extension, ".emlx");
        assert_eq!(config.selector, "span");
        assert_eq!(config.repairs.len(), 3);
        assert!(config.exclusions.contains(&Exclusion::Empty));
        assert!(config.exclusions.contains(&Exclusion::contains("-")));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExtractorConfig::from_json(
            r#"{ "exclusions": [{ "kind": "contains", "text": "Inc." }] }"#,
        )
        .unwrap();

        assert_eq!(config.exclusions, vec![Exclusion::contains("Inc.")]);
        assert_eq!(config.repairs, default_repairs());
        assert_eq!(config.extension, ".emlx");
    }

    #[test]
    fn test_repair_replacement_defaults_to_empty() {
        let config =
            ExtractorConfig::from_json(r#"{ "repairs": [{ "pattern": "=\r\n" }] }"#).unwrap();
        assert_eq!(config.repairs, vec![Repair::strip("=\r\n")]);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ExtractorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ExtractorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ExtractorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExtractorConfig::load(Path::new("/nonexistent/mail-companies.json")).unwrap_err();
        assert!(matches!(err, TallyError::Io { .. }));
    }
}
