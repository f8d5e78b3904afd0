//! Metadata value types for stored records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Metadata value supporting the open-ended caller-supplied types
///
/// Supports:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl MetadataValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, MetadataValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            MetadataValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::String(_) => "String",
            MetadataValue::Integer(_) => "Integer",
            MetadataValue::Float(_) => "Float",
            MetadataValue::Boolean(_) => "Boolean",
            MetadataValue::Null => "Null",
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "\"{}\"", s),
            MetadataValue::Integer(i) => write!(f, "{}", i),
            MetadataValue::Float(fl) => write!(f, "{}", fl),
            MetadataValue::Boolean(b) => write!(f, "{}", b),
            MetadataValue::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions
impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_string())
    }
}

impl From<i64> for MetadataValue {
    fn from(i: i64) -> Self {
        MetadataValue::Integer(i)
    }
}

impl From<i32> for MetadataValue {
    fn from(i: i32) -> Self {
        MetadataValue::Integer(i as i64)
    }
}

impl From<f64> for MetadataValue {
    fn from(f: f64) -> Self {
        MetadataValue::Float(f)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Boolean(b)
    }
}

/// Metadata map attached to every stored record
pub type MetadataMap = HashMap<String, MetadataValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_value_types() {
        assert_eq!(
            MetadataValue::String("test".to_string()).type_name(),
            "String"
        );
        assert_eq!(MetadataValue::Integer(42).type_name(), "Integer");
        assert_eq!(MetadataValue::Float(3.14).type_name(), "Float");
        assert_eq!(MetadataValue::Boolean(true).type_name(), "Boolean");
        assert_eq!(MetadataValue::Null.type_name(), "Null");
    }

    #[test]
    fn test_metadata_value_conversions() {
        let string_val: MetadataValue = "hello".into();
        assert_eq!(string_val.as_string(), Some("hello"));

        let int_val: MetadataValue = 42i64.into();
        assert_eq!(int_val.as_integer(), Some(42));

        let float_val: MetadataValue = 3.14.into();
        assert_eq!(float_val.as_float(), Some(3.14));

        let bool_val: MetadataValue = true.into();
        assert_eq!(bool_val.as_boolean(), Some(true));
    }

    #[test]
    fn test_metadata_map() {
        let mut metadata = MetadataMap::new();
        metadata.insert("filename".to_string(), "report.txt".into());
        metadata.insert("pages".to_string(), 12i64.into());
        metadata.insert("reviewed".to_string(), true.into());

        assert_eq!(
            metadata.get("filename").unwrap().as_string(),
            Some("report.txt")
        );
        assert_eq!(metadata.get("pages").unwrap().as_integer(), Some(12));
        assert_eq!(metadata.get("reviewed").unwrap().as_boolean(), Some(true));
    }

    #[test]
    fn test_serde_roundtrip_ignores_field_order() {
        let val = MetadataValue::Float(0.25);
        let json = serde_json::to_string(&val).unwrap();
        let back: MetadataValue = serde_json::from_str(&json).unwrap();
        assert_eq!(val, back);
    }
}
