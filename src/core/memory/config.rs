//! Construction-time configuration of a memory model
//!
//! Mirrors the parameter bag a host hands to `create`: `INIT_FILE` names the
//! hex initialization file and the optional `AW` sets the address width.

use super::errors::MemoryError;
use crate::core::values::metadata::MetadataMap;
use serde::Deserialize;
use std::path::PathBuf;

/// Parameter naming the initialization file
pub const PARAM_INIT_FILE: &str = "INIT_FILE";
/// Parameter giving the address width in bits
pub const PARAM_ADDR_WIDTH: &str = "AW";

/// Address width used when `AW` is not supplied (1024 words)
pub const DEFAULT_ADDR_WIDTH: u32 = 10;
/// Largest accepted address width (256M words)
pub const MAX_ADDR_WIDTH: u32 = 28;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Hex word file loaded at construction
    pub init_file: PathBuf,
    /// Address width in bits; the array holds 2^address_width words
    #[serde(default = "default_addr_width")]
    pub address_width: u32,
}

fn default_addr_width() -> u32 {
    DEFAULT_ADDR_WIDTH
}

impl MemoryConfig {
    /// Create a configuration with the default address width
    pub fn new(init_file: impl Into<PathBuf>) -> Self {
        Self {
            init_file: init_file.into(),
            address_width: DEFAULT_ADDR_WIDTH,
        }
    }

    /// Set the address width
    pub fn with_address_width(mut self, address_width: u32) -> Self {
        self.address_width = address_width;
        self
    }

    /// Number of words in the array
    pub fn depth(&self) -> usize {
        1usize << self.address_width
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), MemoryError> {
        validate_address_width(self.address_width)
    }

    /// Build a configuration from a host parameter bag
    pub fn from_parameters(parameters: &MetadataMap) -> Result<Self, MemoryError> {
        let init_file = parameters
            .get(PARAM_INIT_FILE)
            .ok_or_else(|| MemoryError::MissingParameter(PARAM_INIT_FILE.to_string()))?;
        let init_file = init_file
            .as_string()
            .ok_or_else(|| MemoryError::InvalidParameter {
                name: PARAM_INIT_FILE.to_string(),
                reason: format!("expected string, got {}", init_file.kind()),
            })?;

        let address_width = match parameters.get(PARAM_ADDR_WIDTH) {
            None => DEFAULT_ADDR_WIDTH,
            Some(value) => value
                .as_uint()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| MemoryError::InvalidParameter {
                    name: PARAM_ADDR_WIDTH.to_string(),
                    reason: format!("expected unsigned integer, got {}", value.kind()),
                })?,
        };

        let config = Self::new(init_file).with_address_width(address_width);
        config.validate()?;
        Ok(config)
    }
}

/// Reject address widths the array cannot be sized for
pub fn validate_address_width(address_width: u32) -> Result<(), MemoryError> {
    if address_width > MAX_ADDR_WIDTH {
        return Err(MemoryError::InvalidParameter {
            name: PARAM_ADDR_WIDTH.to_string(),
            reason: format!("{} exceeds maximum of {}", address_width, MAX_ADDR_WIDTH),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::values::metadata::{self, MetadataValue};

    #[test]
    fn test_default_config() {
        let config = MemoryConfig::new("mem.hex");
        assert_eq!(config.address_width, DEFAULT_ADDR_WIDTH);
        assert_eq!(config.depth(), 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_parameters() {
        let params = metadata::from_json(r#"{"INIT_FILE": "fw.hex", "AW": 2}"#).unwrap();
        let config = MemoryConfig::from_parameters(&params).unwrap();
        assert_eq!(config.init_file, PathBuf::from("fw.hex"));
        assert_eq!(config.address_width, 2);
        assert_eq!(config.depth(), 4);
    }

    #[test]
    fn test_from_parameters_missing_init_file() {
        let mut params = MetadataMap::new();
        params.insert(PARAM_ADDR_WIDTH.to_string(), MetadataValue::UInt(4));
        let result = MemoryConfig::from_parameters(&params);
        assert!(matches!(result, Err(MemoryError::MissingParameter(name)) if name == "INIT_FILE"));
    }

    #[test]
    fn test_from_parameters_wrong_kinds() {
        let params = metadata::from_json(r#"{"INIT_FILE": 3}"#).unwrap();
        assert!(matches!(
            MemoryConfig::from_parameters(&params),
            Err(MemoryError::InvalidParameter { .. })
        ));

        let params = metadata::from_json(r#"{"INIT_FILE": "a.hex", "AW": "wide"}"#).unwrap();
        assert!(matches!(
            MemoryConfig::from_parameters(&params),
            Err(MemoryError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_address_width_limit() {
        assert!(validate_address_width(MAX_ADDR_WIDTH).is_ok());
        assert!(validate_address_width(MAX_ADDR_WIDTH + 1).is_err());
        assert!(validate_address_width(0).is_ok());
    }

    #[test]
    fn test_deserialize_with_default_width() {
        let config: MemoryConfig = serde_json::from_str(r#"{"init_file": "boot.hex"}"#).unwrap();
        assert_eq!(config, MemoryConfig::new("boot.hex"));
    }
}
