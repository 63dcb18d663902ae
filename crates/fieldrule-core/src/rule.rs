//! # Rules and Field Binding
//!
//! A [`Rule`] is configuration plus one check. A [`Field`] binds a rule to a
//! named field of a record type and gates every write to that field through
//! the rule. The binding logic lives here once; rule kinds only implement
//! [`Rule::validate`].
//!
//! ## Storage
//!
//! A field's value lives in an ordinary, private struct field of the record.
//! The `Field` holds accessor functions for that slot, so `get`/`set` take
//! the record itself:
//!
//! ```
//! use fieldrule_core::{Field, Range, Value};
//!
//! struct Crate {
//!     weight: Value,
//! }
//!
//! let weight: Field<Crate, Range> = Field::new(
//!     "weight",
//!     Range::between(1, 40),
//!     |c| &c.weight,
//!     |c| &mut c.weight,
//! );
//!
//! let mut c = Crate { weight: weight.bind(Value::from(12)).unwrap() };
//! assert!(weight.set(&mut c, Value::from(99)).is_err());
//! assert_eq!(weight.get(&c), &Value::from(12));
//! ```
//!
//! ## Invariants
//!
//! - A write that fails validation leaves the slot untouched.
//! - Rules are shared by every record of a type; `validate` takes `&self`
//!   and rules are `Send + Sync`.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// A validation rule for a single field value.
pub trait Rule: fmt::Display + Send + Sync {
    /// The type of value this rule checks and the field stores.
    type Value;

    /// Short, stable name of the rule kind (`membership`, `range`, `text`).
    fn kind(&self) -> &'static str;

    /// Check `value`. The first violated condition is reported.
    fn validate(&self, value: &Self::Value) -> Result<(), ValidationError>;
}

/// A rule bound to one named field of record type `Rec`.
pub struct Field<Rec, R: Rule> {
    name: &'static str,
    rule: R,
    slot: fn(&Rec) -> &R::Value,
    slot_mut: fn(&mut Rec) -> &mut R::Value,
}

impl<Rec, R: Rule> Field<Rec, R> {
    /// Bind `rule` to the field `name`, stored in the slot the two accessors
    /// point at.
    pub fn new(
        name: &'static str,
        rule: R,
        slot: fn(&Rec) -> &R::Value,
        slot_mut: fn(&mut Rec) -> &mut R::Value,
    ) -> Self {
        Self {
            name,
            rule,
            slot,
            slot_mut,
        }
    }

    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The bound rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The private storage key derived from the field name.
    ///
    /// The leading underscore cannot collide with a declared field name.
    pub fn storage_key(&self) -> String {
        format!("_{}", self.name)
    }

    /// Read the field from a record.
    pub fn get<'a>(&self, record: &'a Rec) -> &'a R::Value {
        (self.slot)(record)
    }

    /// Validate a value for a record that is still being constructed.
    ///
    /// Returns the value unchanged on success, ready to be moved into the
    /// record's slot.
    pub fn bind(&self, value: R::Value) -> Result<R::Value, ValidationError> {
        self.check(&value)?;
        Ok(value)
    }

    /// Validate `value` and, only if it passes, store it on `record`.
    pub fn set(&self, record: &mut Rec, value: R::Value) -> Result<(), ValidationError> {
        self.check(&value)?;
        *(self.slot_mut)(record) = value;
        Ok(())
    }

    /// Describe this binding for listings.
    pub fn info(&self) -> FieldInfo {
        FieldInfo {
            name: self.name,
            storage_key: self.storage_key(),
            rule: self.rule.kind(),
            description: self.rule.to_string(),
        }
    }

    fn check(&self, value: &R::Value) -> Result<(), ValidationError> {
        match self.rule.validate(value) {
            Ok(()) => {
                tracing::trace!(field = self.name, rule = self.rule.kind(), "value accepted");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(
                    field = self.name,
                    rule = self.rule.kind(),
                    kind = e.kind(),
                    error = %e,
                    "value rejected"
                );
                Err(e)
            }
        }
    }
}

impl<Rec, R: Rule + fmt::Debug> fmt::Debug for Field<Rec, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

/// A printable summary of one field binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// Declared field name.
    pub name: &'static str,
    /// Private storage key.
    pub storage_key: String,
    /// Rule kind.
    pub rule: &'static str,
    /// Human-readable rule configuration.
    pub description: String,
}

/// A record type whose fields are gated by rules.
pub trait Record {
    /// Declared field names, in construction order.
    fn field_names() -> &'static [&'static str];

    /// One entry per field, in construction order.
    fn describe() -> Vec<FieldInfo>;
}
