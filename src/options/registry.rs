//! Registry of every option understood by the export submodules

use std::collections::BTreeMap;

use super::registrations;
use super::set::OptionSet;
use super::types::OptionDefinition;
use crate::error::{Error, Result};

/// Immutable collection of option definitions
///
/// The registry only describes options. Values live in an [`OptionSet`]
/// created per dispatch call, so nothing here is ever mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct OptionsRegistry {
    definitions: BTreeMap<String, OptionDefinition>,
}

impl OptionsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard export options of all submodules
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        registrations::register_all(&mut registry)?;
        log::debug!("Registered {} export options", registry.count());
        Ok(registry)
    }

    /// Register a new option definition
    ///
    /// Returns an error if an option with the same key is already registered
    pub fn register(&mut self, def: OptionDefinition) -> Result<()> {
        if self.definitions.contains_key(&def.key) {
            return Err(Error::DuplicateOption { option: def.key });
        }
        log::trace!("Registered option: {} ({})", def.key, def.group);
        self.definitions.insert(def.key.clone(), def);
        Ok(())
    }

    /// Get option definition by key
    pub fn get(&self, key: &str) -> Option<&OptionDefinition> {
        self.definitions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Get total number of registered options
    pub fn count(&self) -> usize {
        self.definitions.len()
    }

    /// List all option definitions, sorted by key
    pub fn list_all(&self) -> Vec<&OptionDefinition> {
        self.definitions.values().collect()
    }

    /// List all options in a group, sorted by key
    pub fn list_group(&self, group: &str) -> Vec<&OptionDefinition> {
        self.definitions
            .values()
            .filter(|def| def.group == group)
            .collect()
    }

    /// Get all unique groups
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<_> = self.definitions.values().map(|def| def.group.clone()).collect();
        groups.sort();
        groups.dedup();
        groups
    }

    /// Fresh option set holding every default value
    pub fn defaults(&self) -> OptionSet {
        self.definitions
            .values()
            .map(|def| (def.key.clone(), def.default.clone()))
            .collect()
    }

    /// Keys in `set` whose value does not fit the declared type
    ///
    /// Mismatches are reported, not rejected; conversion into a submodule's
    /// typed options decides whether a value is usable.
    pub fn check(&self, set: &OptionSet) -> Vec<String> {
        set.iter()
            .filter_map(|(key, value)| {
                let def = self.definitions.get(key)?;
                (!def.ty.matches(value)).then(|| {
                    format!("{} (expected {}, got {})", key, def.ty, value.kind())
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::builder::OptionDefBuilder;
    use crate::options::types::OptionValue;

    fn def(group: &str, key: &str) -> OptionDefinition {
        OptionDefBuilder::new(group, key).bool_type(false).build().unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = OptionsRegistry::new();
        registry.register(def("grid", "coords")).unwrap();

        let retrieved = registry.get("coords").unwrap();
        assert_eq!(retrieved.key, "coords");
        assert_eq!(retrieved.group, "grid");
        assert!(registry.get("pillars").is_none());
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = OptionsRegistry::new();
        registry.register(def("grid", "coords")).unwrap();

        let result = registry.register(def("nnc", "coords"));
        assert!(matches!(result, Err(Error::DuplicateOption { .. })));
    }

    #[test]
    fn test_list_group_and_groups() {
        let mut registry = OptionsRegistry::new();
        registry.register(def("grid", "coords")).unwrap();
        registry.register(def("grid", "pillars")).unwrap();
        registry.register(def("summary", "params")).unwrap();

        assert_eq!(registry.list_group("grid").len(), 2);
        assert_eq!(registry.list_group("summary").len(), 1);
        assert_eq!(registry.groups(), vec!["grid".to_string(), "summary".to_string()]);
    }

    #[test]
    fn test_standard_registry_defaults() {
        let registry = OptionsRegistry::standard().unwrap();
        assert_eq!(registry.count(), 35);

        let defaults = registry.defaults();
        assert_eq!(defaults.get("fipname"), Some(&OptionValue::from("FIPNUM")));
        assert_eq!(defaults.get("soilcutoff"), Some(&OptionValue::Float(0.5)));
        assert_eq!(defaults.get("time_index"), Some(&OptionValue::from("raw")));
        assert_eq!(defaults.get("keyword"), Some(&OptionValue::from("VFPPROD")));
        assert_eq!(defaults.get("wellname"), Some(&OptionValue::Absent));
        assert!(registry.check(&defaults).is_empty());
    }

    #[test]
    fn test_check_reports_mismatch_without_rejecting() {
        let registry = OptionsRegistry::standard().unwrap();
        let mut overrides = BTreeMap::new();
        overrides.insert("coords".to_string(), OptionValue::from("yes"));
        let set = registry.defaults().with_overrides(&overrides);

        assert_eq!(set.get("coords"), Some(&OptionValue::from("yes")));
        assert_eq!(registry.check(&set), vec!["coords (expected bool, got string)".to_string()]);
    }
}
