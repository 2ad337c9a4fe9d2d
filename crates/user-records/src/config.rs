//! Configuration
//!
//! Where records are stored and how chatty the logs are.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::RecordResult;

/// Slot key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "users";

/// Runtime configuration for the records component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordsConfig {
    /// Key of the local storage slot holding the collection
    pub storage_key: String,
    /// Maximum log level forwarded to the log backend
    pub log_level: LevelFilter,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl RecordsConfig {
    /// Parse a (possibly partial) JSON object; missing keys take defaults
    pub fn from_json(json: &str) -> RecordResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecordsConfig::default();
        assert_eq!(config.storage_key, "users");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RecordsConfig::from_json(r#"{"storageKey":"contacts"}"#).unwrap();
        assert_eq!(config.storage_key, "contacts");
        assert_eq!(config.log_level, LevelFilter::Info);

        let config = RecordsConfig::from_json(r#"{"logLevel":"DEBUG"}"#).unwrap();
        assert_eq!(config.storage_key, "users");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(RecordsConfig::from_json("{storageKey").is_err());
    }
}
