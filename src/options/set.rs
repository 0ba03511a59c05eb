//! Per-call option values

use std::collections::BTreeMap;

use super::types::OptionValue;
use crate::error::{Error, Result};

/// Option values for a single dispatch call
///
/// Every operation returns a new set, so a caller's overrides never reach
/// another call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    values: BTreeMap<String, OptionValue>,
}

impl OptionSet {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Value for `key`, treating a missing entry as absent
    pub fn value(&self, key: &str) -> &OptionValue {
        self.values.get(key).unwrap_or(&OptionValue::Absent)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.values.iter()
    }

    /// Copy of this set with overrides applied
    ///
    /// Only keys already in the set are replaced. Unknown keys are dropped,
    /// and a null override keeps the current value.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, OptionValue>) -> OptionSet {
        let mut values = self.values.clone();
        for (key, value) in overrides {
            match values.get_mut(key) {
                Some(_) if value.is_absent() => log::debug!("Null override for '{}', keeping its value", key),
                Some(slot) => *slot = value.clone(),
                None => log::debug!("Ignoring unknown option '{}'", key),
            }
        }
        OptionSet { values }
    }

    /// Subset holding only the named options that exist in this set
    pub fn filtered(&self, names: &[&str]) -> OptionSet {
        names
            .iter()
            .filter_map(|name| {
                self.values
                    .get(*name)
                    .map(|value| (name.to_string(), value.clone()))
            })
            .collect()
    }
}

impl FromIterator<(String, OptionValue)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        OptionSet {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parse `key=value` overrides, reading each value as a YAML scalar or list
pub fn parse_overrides<S: AsRef<str>>(pairs: &[S]) -> Result<BTreeMap<String, OptionValue>> {
    let mut overrides = BTreeMap::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let Some((key, raw)) = pair.split_once('=') else {
            return Err(Error::InvalidOverride {
                input: pair.to_string(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidOverride {
                input: pair.to_string(),
            });
        }
        let value = serde_yaml::from_str::<OptionValue>(raw)
            .unwrap_or_else(|_| OptionValue::Text(raw.to_string()));
        overrides.insert(key.to_string(), value);
    }
    Ok(overrides)
}
