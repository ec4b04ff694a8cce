//! Configuration for huffman-codes

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HuffmanError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoderConfig {
    /// Separator placed between code tokens in the encoded output.
    pub delimiter: String,
    /// Code given to the only symbol of a one-symbol input.
    pub single_symbol_code: String,
    /// Maximum number of symbols accepted.
    pub max_input_size: usize,
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            delimiter: " ".to_string(),
            single_symbol_code: "0".to_string(),
            max_input_size: 100 * 1024 * 1024, // 100 Mi symbols
        }
    }
}

impl CoderConfig {
    /// Parse a config from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CoderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would make the encoded output ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(HuffmanError::InvalidConfig("delimiter must not be empty".into()));
        }
        if self.delimiter.contains(['0', '1']) {
            return Err(HuffmanError::InvalidConfig(format!(
                "delimiter {:?} must not contain code digits",
                self.delimiter
            )));
        }
        if self.single_symbol_code.is_empty()
            || !self.single_symbol_code.chars().all(|c| c == '0' || c == '1')
        {
            return Err(HuffmanError::InvalidConfig(format!(
                "single_symbol_code {:?} must be a non-empty string of 0/1",
                self.single_symbol_code
            )));
        }
        if self.max_input_size == 0 {
            return Err(HuffmanError::InvalidConfig("max_input_size must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CoderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter, " ");
        assert_eq!(config.single_symbol_code, "0");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CoderConfig::from_json_str(r#"{"delimiter": ","}"#).unwrap();
        assert_eq!(config.delimiter, ",");
        assert_eq!(config.single_symbol_code, "0");
        assert_eq!(config.max_input_size, CoderConfig::default().max_input_size);
    }

    #[test]
    fn test_rejects_digit_delimiter() {
        let config = CoderConfig {
            delimiter: "1".into(),
            ..CoderConfig::default()
        };
        assert!(matches!(config.validate(), Err(HuffmanError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_single_symbol_code() {
        for code in ["", "2", "0a"] {
            let config = CoderConfig {
                single_symbol_code: code.into(),
                ..CoderConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {:?}", code);
        }
    }

    #[test]
    fn test_malformed_json() {
        let result = CoderConfig::from_json_str("{not json");
        assert!(matches!(result, Err(HuffmanError::SerializationError(_))));
    }
}
