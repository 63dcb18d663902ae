//! # Membership Rule
//!
//! Accepts a value only if it is one of a fixed set of options. Membership
//! is plain equality on `T`; nothing is coerced.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{MembershipError, ValidationError};
use crate::rule::Rule;
use crate::value::Value;

/// The value must be one of a fixed set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership<T> {
    options: BTreeSet<T>,
}

impl<T: Ord> Membership<T> {
    /// Build the rule from its allowed options. Duplicates collapse.
    pub fn new<I, U>(options: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<T>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed options, sorted.
    pub fn options(&self) -> &BTreeSet<T> {
        &self.options
    }

    /// Whether `value` is an allowed option.
    pub fn contains(&self, value: &T) -> bool {
        self.options.contains(value)
    }
}

impl<T: Clone + Into<Value>> Membership<T> {
    fn option_values(&self) -> Vec<Value> {
        self.options.iter().cloned().map(Into::into).collect()
    }
}

impl<T> Rule for Membership<T>
where
    T: Ord + Clone + Into<Value> + Send + Sync,
{
    type Value = T;

    fn kind(&self) -> &'static str {
        "membership"
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if self.contains(value) {
            return Ok(());
        }
        Err(MembershipError {
            value: value.clone().into(),
            options: self.option_values(),
        }
        .into())
    }
}

impl<T: Clone + Into<Value>> fmt::Display for Membership<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.option_values().iter().map(ToString::to_string).collect();
        write!(f, "one of [{}]", items.join(", "))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every configured option is accepted.
        #[test]
        fn members_always_accepted(options in prop::collection::btree_set("[a-z]{1,8}", 1..8)) {
            let rule: Membership<String> = Membership::new(options.iter().cloned());
            for option in &options {
                prop_assert!(rule.validate(option).is_ok());
            }
        }

        /// A non-member is rejected, and the error lists exactly the configured set.
        #[test]
        fn non_members_rejected_with_options(
            options in prop::collection::btree_set("[a-z]{1,8}", 1..8),
            candidate in "[A-Z]{1,8}",
        ) {
            let rule: Membership<String> = Membership::new(options.iter().cloned());
            let err = rule.validate(&candidate).unwrap_err();
            let expected: Vec<Value> = options.iter().map(Value::from).collect();
            prop_assert_eq!(err.options(), Some(expected.as_slice()));
        }

        /// Validation holds no state between calls.
        #[test]
        fn validation_is_idempotent(options in prop::collection::btree_set(0i64..100, 1..10)) {
            let rule: Membership<i64> = Membership::new(options.iter().copied());
            let snapshot: BTreeSet<i64> = rule.options().clone();
            for option in &options {
                prop_assert!(rule.validate(option).is_ok());
                prop_assert!(rule.validate(option).is_ok());
            }
            prop_assert_eq!(rule.options(), &snapshot);
        }
    }
}
