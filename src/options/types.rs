//! Core types for export options

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A loosely-typed option value as it appears in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Absent,
    Bool(bool),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionValue::Absent)
    }

    /// Short type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Absent => "absent",
            OptionValue::Bool(_) => "bool",
            OptionValue::Float(_) => "float",
            OptionValue::Text(_) => "string",
            OptionValue::List(_) => "list",
        }
    }

    /// Get as bool, returning error if wrong type
    pub fn as_bool(&self, option: &str) -> Result<bool> {
        match self {
            OptionValue::Bool(v) => Ok(*v),
            _ => Err(self.mismatch(option, "bool")),
        }
    }

    /// Get as float, returning error if wrong type
    pub fn as_float(&self, option: &str) -> Result<f64> {
        match self {
            OptionValue::Float(v) => Ok(*v),
            _ => Err(self.mismatch(option, "float")),
        }
    }

    /// Get as string. Floats and bools are rendered, since YAML may
    /// read a date-like or numeric value as a scalar.
    pub fn as_text(&self, option: &str) -> Result<String> {
        match self {
            OptionValue::Text(v) => Ok(v.clone()),
            OptionValue::Float(v) => Ok(v.to_string()),
            OptionValue::Bool(v) => Ok(v.to_string()),
            _ => Err(self.mismatch(option, "string")),
        }
    }

    /// Get as an optional string; absent maps to None
    pub fn as_opt_text(&self, option: &str) -> Result<Option<String>> {
        match self {
            OptionValue::Absent => Ok(None),
            other => other.as_text(option).map(Some),
        }
    }

    /// Get as a string list. A bare string is a one-element list.
    pub fn as_list(&self, option: &str) -> Result<Vec<String>> {
        match self {
            OptionValue::List(v) => Ok(v.clone()),
            OptionValue::Text(v) => Ok(vec![v.clone()]),
            _ => Err(self.mismatch(option, "list of strings")),
        }
    }

    /// Get as an optional string list; absent maps to None
    pub fn as_opt_list(&self, option: &str) -> Result<Option<Vec<String>>> {
        match self {
            OptionValue::Absent => Ok(None),
            other => other.as_list(option).map(Some),
        }
    }

    fn mismatch(&self, option: &str, expected: &str) -> Error {
        Error::OptionType {
            option: option.to_string(),
            expected: expected.to_string(),
            got: self.kind().to_string(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Absent => write!(f, "~"),
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Text(v) => write!(f, "{:?}", v),
            OptionValue::List(v) => write!(f, "[{}]", v.join(", ")),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(v: Vec<&str>) -> Self {
        OptionValue::List(v.into_iter().map(str::to_string).collect())
    }
}

/// Declared type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Bool,
    Float,
    Text,
    List,
}

impl OptionType {
    /// Check if a value is acceptable for this type. Absent is always
    /// accepted, and a list option also takes a single string.
    pub fn matches(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (_, OptionValue::Absent) => true,
            (OptionType::Bool, OptionValue::Bool(_)) => true,
            (OptionType::Float, OptionValue::Float(_)) => true,
            (OptionType::Text, OptionValue::Text(_)) => true,
            (OptionType::List, OptionValue::List(_) | OptionValue::Text(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Bool => "bool",
            OptionType::Float => "float",
            OptionType::Text => "string",
            OptionType::List => "list",
        };
        f.write_str(name)
    }
}

/// Complete definition of an export option
#[derive(Debug, Clone, Serialize)]
pub struct OptionDefinition {
    /// Option name as used in config files (e.g. "fipname")
    pub key: String,

    /// Group the option is listed under (e.g. "grid")
    pub group: String,

    /// Detailed description for help text
    pub description: String,

    pub ty: OptionType,

    pub default: OptionValue,
}
