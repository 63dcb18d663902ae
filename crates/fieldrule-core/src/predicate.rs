//! # Named Predicates
//!
//! A [`Predicate`] is a unary `&str -> bool` test paired with the name that
//! error messages print. The name is mandatory: a failed predicate is
//! reported as `Expected isupper("Widget") is true`, so an anonymous
//! closure would leave the caller with nothing to act on.
//!
//! The built-in predicates follow the semantics of the familiar string
//! methods they are named after (`isupper` requires at least one cased
//! character, `isalpha` rejects the empty string, and so on).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// A named string predicate.
///
/// Cheap to clone; the function itself is shared.
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    func: Arc<PredicateFn>,
}

impl Predicate {
    /// Wrap a plain function under a static name.
    pub fn new(name: &'static str, func: fn(&str) -> bool) -> Self {
        Self {
            name: Cow::Borrowed(name),
            func: Arc::new(func),
        }
    }

    /// Wrap any thread-safe closure under the given name.
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The label used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the predicate.
    pub fn test(&self, value: &str) -> bool {
        (self.func)(value)
    }

    /// All cased characters are uppercase, and there is at least one.
    pub fn is_upper() -> Self {
        Self::new("isupper", |s| {
            s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
        })
    }

    /// All cased characters are lowercase, and there is at least one.
    pub fn is_lower() -> Self {
        Self::new("islower", |s| {
            s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
        })
    }

    /// Non-empty and every character is alphabetic.
    pub fn is_alphabetic() -> Self {
        Self::new("isalpha", |s| !s.is_empty() && s.chars().all(char::is_alphabetic))
    }

    /// Non-empty and every character is alphanumeric.
    pub fn is_alphanumeric() -> Self {
        Self::new("isalnum", |s| {
            !s.is_empty() && s.chars().all(char::is_alphanumeric)
        })
    }

    /// Non-empty and every character is numeric.
    pub fn is_numeric() -> Self {
        Self::new("isnumeric", |s| !s.is_empty() && s.chars().all(char::is_numeric))
    }

    /// Every character is ASCII. True for the empty string.
    pub fn is_ascii() -> Self {
        Self::new("isascii", |s| s.is_ascii())
    }

    /// Accepts every string.
    pub fn any() -> Self {
        Self::new("any", |_| true)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
