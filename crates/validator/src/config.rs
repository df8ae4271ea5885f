//! Coercion configuration

use serde::{Deserialize, Serialize};

/// Validator configuration
///
/// Every field has a default, so an override document only needs to name
/// the fields it changes:
///
/// ```
/// use paramguard_validator::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json_str(r#"{ "array_delimiter": ";" }"#).unwrap();
/// assert_eq!(config.array_delimiter, ";");
/// assert_eq!(config.hash_separator, ":");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Splits string input for arrays and hash pairs
    pub array_delimiter: String,

    /// Splits a hash pair into key and value
    pub hash_separator: String,

    /// Leading symbols stripped before decimal parsing
    pub currency_symbols: Vec<char>,

    /// Date patterns tried in order when no format is declared
    pub date_formats: Vec<String>,

    /// Naive date-time patterns, interpreted as UTC
    pub datetime_formats: Vec<String>,

    /// Time-of-day patterns
    pub time_formats: Vec<String>,
}

impl ValidatorConfig {
    /// Parses a JSON override document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn strings(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_owned()).collect()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            array_delimiter: ",".to_string(),
            hash_separator: ":".to_string(),
            currency_symbols: vec!['$', '€', '£', '¥'],
            date_formats: strings(&[
                "%Y-%m-%d",
                "%Y/%m/%d",
                "%d %B %Y",
                "%B %d, %Y",
                "%d %b %Y",
                "%b %d, %Y",
                "%Y%m%d",
            ]),
            datetime_formats: strings(&[
                "%Y-%m-%dT%H:%M:%S",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%dT%H:%M",
                "%Y-%m-%d %H:%M",
            ]),
            time_formats: strings(&["%H:%M:%S", "%H:%M", "%H:%M:%S%.f"]),
        }
    }
}
