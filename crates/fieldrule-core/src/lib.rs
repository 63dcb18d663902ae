//! # fieldrule-core — Declarative Field Validation
//!
//! Reusable validation rules bound to named fields of a record type. Every
//! write to such a field passes through its rule first; a rejected value
//! never reaches the record, and the caller gets a structured error saying
//! exactly which parameter was violated.
//!
//! ## Key Design Principles
//!
//! 1. **One binding, many rules.** [`Field`] implements get/set/bind once.
//!    A rule kind only implements [`Rule::validate`].
//!
//! 2. **Rules are shared configuration.** A record type owns one rule per
//!    field, built once and shared by every instance. `validate` takes
//!    `&self`; rules are `Send + Sync`.
//!
//! 3. **Closed error taxonomy.** [`ValidationError`] is a sum type over
//!    membership, number and text failures. Each variant carries the
//!    rejected value and the violated parameter, copied at raise time.
//!
//! 4. **First failure wins.** Rules check in a fixed order and report one
//!    error. Records bind fields in declared order and abort on the first
//!    rejected field; no partially valid record is ever returned.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Validation is synchronous and pure: no I/O, no interior mutability.

pub mod component;
pub mod error;
pub mod membership;
pub mod predicate;
pub mod range;
pub mod rule;
pub mod text;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use component::{Component, ComponentInput, ComponentRules};
pub use error::{MembershipError, NumberError, TextError, ValidationError};
pub use membership::Membership;
pub use predicate::Predicate;
pub use range::Range;
pub use rule::{Field, FieldInfo, Record, Rule};
pub use text::Text;
pub use value::{Number, Value};
