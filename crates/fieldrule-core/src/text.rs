//! # Text Rule
//!
//! Accepts strings whose length lies within `[minsize, maxsize]` and that
//! satisfy a named predicate. Length is counted in characters, not bytes.
//!
//! The checks run in a fixed order and the first failure wins: a string
//! that is too short is reported as short even if it would also fail the
//! predicate.

use std::fmt;

use crate::error::{TextError, ValidationError};
use crate::predicate::Predicate;
use crate::rule::Rule;

/// The value must be a string of bounded length satisfying a predicate.
#[derive(Debug, Clone)]
pub struct Text {
    minsize: usize,
    maxsize: usize,
    predicate: Predicate,
}

impl Text {
    /// Build a text rule.
    ///
    /// `minsize > maxsize` is accepted; such a rule rejects every string.
    pub fn new(minsize: usize, maxsize: usize, predicate: Predicate) -> Self {
        Self {
            minsize,
            maxsize,
            predicate,
        }
    }

    /// Length bounds only.
    pub fn length(minsize: usize, maxsize: usize) -> Self {
        Self::new(minsize, maxsize, Predicate::any())
    }

    /// Minimum length in characters.
    pub fn minsize(&self) -> usize {
        self.minsize
    }

    /// Maximum length in characters.
    pub fn maxsize(&self) -> usize {
        self.maxsize
    }

    /// The predicate applied after the length checks.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Check a string slice.
    pub fn check(&self, value: &str) -> Result<(), TextError> {
        let len = value.chars().count();
        if len < self.minsize {
            return Err(TextError::Short {
                value: value.to_string(),
                minsize: self.minsize,
            });
        }
        if len > self.maxsize {
            return Err(TextError::Long {
                value: value.to_string(),
                maxsize: self.maxsize,
            });
        }
        if !self.predicate.test(value) {
            return Err(TextError::Predicate {
                value: value.to_string(),
                predicate: self.predicate.name().to_string(),
            });
        }
        Ok(())
    }
}

impl Rule for Text {
    type Value = String;

    fn kind(&self) -> &'static str {
        "text"
    }

    fn validate(&self, value: &String) -> Result<(), ValidationError> {
        self.check(value)?;
        Ok(())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <= len <= {} and {}",
            self.minsize, self.maxsize, self.predicate
        )
    }
}
