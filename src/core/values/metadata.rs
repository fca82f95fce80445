use crate::core::memory::errors::MemoryError;
use serde::Deserialize;
use std::collections::HashMap;

/// Value of a cell parameter or attribute as handed over by the host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    UInt(u64),
    SInt(i64),
    Double(f64),
    String(String),
}

impl MetadataValue {
    /// Get the value as a string, if it is one
    pub fn as_string(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an unsigned integer, if it is a non-negative integer
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            MetadataValue::UInt(v) => Some(*v),
            MetadataValue::SInt(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Human-readable kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataValue::UInt(_) => "unsigned integer",
            MetadataValue::SInt(_) => "signed integer",
            MetadataValue::Double(_) => "double",
            MetadataValue::String(_) => "string",
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        MetadataValue::UInt(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::SInt(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Double(value)
    }
}

/// Named parameter/attribute bag
pub type MetadataMap = HashMap<String, MetadataValue>;

/// Parse a metadata bag from a JSON object, e.g. `{"INIT_FILE": "mem.hex", "AW": 10}`
pub fn from_json(text: &str) -> Result<MetadataMap, MemoryError> {
    serde_json::from_str(text).map_err(|e| MemoryError::InvalidConfig(e.to_string()))
}
