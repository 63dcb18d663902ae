//! # Component — Sample Validated Record
//!
//! A part record with three rule-gated fields:
//!
//! | Field      | Rule                                     |
//! |------------|------------------------------------------|
//! | `name`     | `Text(3, 10, isupper)`                   |
//! | `kind`     | `Membership("wood", "metal", "plastic")` |
//! | `quantity` | `Range(3, 25)`                           |
//!
//! The rule table is built once and shared by every `Component`.
//! Construction binds the fields in declared order and stops at the first
//! failure, so a `Component` value is always fully valid. Deserialization
//! goes through the same path.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::membership::Membership;
use crate::predicate::Predicate;
use crate::range::Range;
use crate::rule::{Field, FieldInfo, Record};
use crate::text::Text;
use crate::value::Value;

/// Shared rule table for [`Component`].
#[derive(Debug)]
pub struct ComponentRules {
    /// Upper-case name, 3 to 10 characters.
    pub name: Field<Component, Text>,
    /// Material.
    pub kind: Field<Component, Membership<String>>,
    /// Numeric quantity in `[3, 25]`.
    pub quantity: Field<Component, Range>,
}

impl ComponentRules {
    fn new() -> Self {
        Self {
            name: Field::new(
                "name",
                Text::new(3, 10, Predicate::is_upper()),
                |c| &c.name,
                |c| &mut c.name,
            ),
            kind: Field::new(
                "kind",
                Membership::new(["wood", "metal", "plastic"]),
                |c| &c.kind,
                |c| &mut c.kind,
            ),
            quantity: Field::new(
                "quantity",
                Range::between(3, 25),
                |c| &c.quantity,
                |c| &mut c.quantity,
            ),
        }
    }
}

/// A validated part record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComponentInput")]
pub struct Component {
    name: String,
    kind: String,
    quantity: Value,
}

/// Unvalidated component fields, as read from a file or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInput {
    /// Proposed name.
    pub name: String,
    /// Proposed kind.
    pub kind: String,
    /// Proposed quantity, any type.
    pub quantity: Value,
}

impl Component {
    /// The rule table shared by all components.
    pub fn rules() -> &'static ComponentRules {
        static RULES: OnceLock<ComponentRules> = OnceLock::new();
        RULES.get_or_init(ComponentRules::new)
    }

    /// Build a component, validating `name`, `kind`, then `quantity`.
    ///
    /// # Errors
    ///
    /// Returns the first field's [`ValidationError`], unmodified.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let rules = Self::rules();
        Ok(Self {
            name: rules.name.bind(name.into())?,
            kind: rules.kind.bind(kind.into())?,
            quantity: rules.quantity.bind(quantity.into())?,
        })
    }

    /// The component's name.
    pub fn name(&self) -> &str {
        Self::rules().name.get(self)
    }

    /// The component's kind.
    pub fn kind(&self) -> &str {
        Self::rules().kind.get(self)
    }

    /// The component's quantity. Always numeric.
    pub fn quantity(&self) -> &Value {
        Self::rules().quantity.get(self)
    }

    /// Replace the name. On error the old name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        Self::rules().name.set(self, name.into())
    }

    /// Replace the kind. On error the old kind is kept.
    pub fn set_kind(&mut self, kind: impl Into<String>) -> Result<(), ValidationError> {
        Self::rules().kind.set(self, kind.into())
    }

    /// Replace the quantity. On error the old quantity is kept.
    pub fn set_quantity(&mut self, quantity: impl Into<Value>) -> Result<(), ValidationError> {
        Self::rules().quantity.set(self, quantity.into())
    }
}

impl Record for Component {
    fn field_names() -> &'static [&'static str] {
        &["name", "kind", "quantity"]
    }

    fn describe() -> Vec<FieldInfo> {
        let rules = Self::rules();
        vec![rules.name.info(), rules.kind.info(), rules.quantity.info()]
    }
}

impl TryFrom<ComponentInput> for Component {
    type Error = ValidationError;

    fn try_from(input: ComponentInput) -> Result<Self, Self::Error> {
        Self::new(input.name, input.kind, input.quantity)
    }
}

impl From<Component> for ComponentInput {
    fn from(c: Component) -> Self {
        Self {
            name: c.name,
            kind: c.kind,
            quantity: c.quantity,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.kind, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_component_display() {
        let c = Component::new("WIDGET", "metal", 5).unwrap();
        assert_eq!(c.to_string(), "WIDGET, metal, 5");
        assert_eq!(c.name(), "WIDGET");
        assert_eq!(c.kind(), "metal");
        assert_eq!(c.quantity(), &Value::Int(5));
    }

    #[test]
    fn test_first_failing_field_wins() {
        // Every field is invalid; `name` is bound first.
        let err = Component::new("wi", "glass", "x").unwrap_err();
        assert_eq!(err.kind(), "text_short");
    }

    #[test]
    fn test_setter_keeps_old_value_on_error() {
        let mut c = Component::new("WIDGET", "metal", 5).unwrap();
        assert!(c.set_quantity(100).is_err());
        assert!(c.set_kind("glass").is_err());
        assert!(c.set_name("gadget").is_err());
        assert_eq!(c.to_string(), "WIDGET, metal, 5");

        c.set_quantity(7.5).unwrap();
        c.set_kind("wood").unwrap();
        c.set_name("GADGET").unwrap();
        assert_eq!(c.to_string(), "GADGET, wood, 7.5");
    }

    #[test]
    fn test_rule_table_is_shared() {
        assert!(std::ptr::eq(Component::rules(), Component::rules()));
    }

    #[test]
    fn test_describe_lists_fields_in_order() {
        let info = Component::describe();
        let names: Vec<&str> = info.iter().map(|i| i.name).collect();
        assert_eq!(names, Component::field_names());
        assert_eq!(info[0].storage_key, "_name");
        assert_eq!(info[1].description, r#"one of ["metal", "plastic", "wood"]"#);
        assert_eq!(info[2].description, "3 <= value <= 25");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Component =
            serde_json::from_str(r#"{"name":"WIDGET","kind":"wood","quantity":10}"#).unwrap();
        assert_eq!(ok.to_string(), "WIDGET, wood, 10");

        let err = serde_json::from_str::<Component>(
            r#"{"name":"WIDGET","kind":"wood","quantity":"10"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("of type int or float"), "{err}");
    }

    #[test]
    fn test_serialize_shape() {
        let c = Component::new("FOO", "plastic", 3).unwrap();
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"name": "FOO", "kind": "plastic", "quantity": 3})
        );
    }
}
