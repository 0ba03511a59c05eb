//! Fluent builder API for creating option definitions

use super::types::{OptionDefinition, OptionType, OptionValue};
use crate::error::{Error, Result};

/// Builder for creating option definitions with a fluent API
pub struct OptionDefBuilder {
    group: String,
    key: String,
    description: Option<String>,
    ty: Option<OptionType>,
    default: Option<OptionValue>,
}

impl OptionDefBuilder {
    /// Create a new builder for an option in a group
    pub fn new(group: &str, key: &str) -> Self {
        Self {
            group: group.to_string(),
            key: key.to_string(),
            description: None,
            ty: None,
            default: None,
        }
    }

    /// Set the description (help text)
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Define as a boolean type with default value
    pub fn bool_type(mut self, default: bool) -> Self {
        self.ty = Some(OptionType::Bool);
        self.default = Some(OptionValue::Bool(default));
        self
    }

    /// Define as a float type with default value
    pub fn float_type(mut self, default: f64) -> Self {
        self.ty = Some(OptionType::Float);
        self.default = Some(OptionValue::Float(default));
        self
    }

    /// Define as a string type with default value
    pub fn text_type(mut self, default: &str) -> Self {
        self.ty = Some(OptionType::Text);
        self.default = Some(OptionValue::Text(default.to_string()));
        self
    }

    /// Define as a string type that is absent unless given
    pub fn optional_text(mut self) -> Self {
        self.ty = Some(OptionType::Text);
        self.default = Some(OptionValue::Absent);
        self
    }

    /// Define as a string list that is absent unless given
    pub fn optional_list(mut self) -> Self {
        self.ty = Some(OptionType::List);
        self.default = Some(OptionValue::Absent);
        self
    }

    /// Define as a string list whose default is a single pattern
    pub fn list_type(mut self, default: &str) -> Self {
        self.ty = Some(OptionType::List);
        self.default = Some(OptionValue::Text(default.to_string()));
        self
    }

    /// Build the option definition
    ///
    /// Returns an error if no type was chosen
    pub fn build(self) -> Result<OptionDefinition> {
        let Some(ty) = self.ty else {
            return Err(Error::IncompleteDefinition { option: self.key });
        };
        let default = self.default.unwrap_or(OptionValue::Absent);

        Ok(OptionDefinition {
            key: self.key,
            group: self.group,
            description: self.description.unwrap_or_default(),
            ty,
            default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_builder() {
        let def = OptionDefBuilder::new("grid", "coords")
            .description("Add cell coordinates")
            .bool_type(false)
            .build()
            .unwrap();

        assert_eq!(def.key, "coords");
        assert_eq!(def.group, "grid");
        assert_eq!(def.description, "Add cell coordinates");
        assert_eq!(def.ty, OptionType::Bool);
        assert_eq!(def.default, OptionValue::Bool(false));
    }

    #[test]
    fn test_optional_list_defaults_to_absent() {
        let def = OptionDefBuilder::new("deck", "keywords").optional_list().build().unwrap();

        assert_eq!(def.ty, OptionType::List);
        assert!(def.default.is_absent());
        assert!(def.description.is_empty());
    }

    #[test]
    fn test_list_type_with_pattern_default() {
        let def = OptionDefBuilder::new("grid", "vectors").list_type("*").build().unwrap();
        assert_eq!(def.default, OptionValue::Text("*".to_string()));
    }

    #[test]
    fn test_missing_type() {
        let result = OptionDefBuilder::new("test", "option")
            .description("Test")
            .build();

        assert!(result.is_err());
    }
}
