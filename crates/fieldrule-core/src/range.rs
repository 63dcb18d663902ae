//! # Range Rule
//!
//! Accepts integers and floats between optional bounds. Checks run in a
//! fixed order and stop at the first failure:
//!
//! 1. the value must be numeric (`NumberError::Type`),
//! 2. it must not be below the minimum (`NumberError::Low`),
//! 3. it must not be above the maximum (`NumberError::High`).
//!
//! A bound is violated only when the value is strictly below the minimum or
//! strictly above the maximum. A NaN is neither, so it is accepted.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{NumberError, ValidationError};
use crate::rule::Rule;
use crate::value::{Number, Value};

/// The value must be a number within `[minvalue, maxvalue]`.
///
/// Either bound may be absent, leaving that side open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    minvalue: Option<Number>,
    maxvalue: Option<Number>,
}

impl Range {
    /// Build a range from optional bounds.
    ///
    /// Bounds are not checked against each other: a range whose minimum
    /// exceeds its maximum rejects every number.
    pub fn new(minvalue: Option<Number>, maxvalue: Option<Number>) -> Self {
        Self { minvalue, maxvalue }
    }

    /// Both bounds inclusive.
    pub fn between(minvalue: impl Into<Number>, maxvalue: impl Into<Number>) -> Self {
        Self::new(Some(minvalue.into()), Some(maxvalue.into()))
    }

    /// Lower bound only.
    pub fn at_least(minvalue: impl Into<Number>) -> Self {
        Self::new(Some(minvalue.into()), None)
    }

    /// Upper bound only.
    pub fn at_most(maxvalue: impl Into<Number>) -> Self {
        Self::new(None, Some(maxvalue.into()))
    }

    /// Any number at all.
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// The configured minimum.
    pub fn minvalue(&self) -> Option<Number> {
        self.minvalue
    }

    /// The configured maximum.
    pub fn maxvalue(&self) -> Option<Number> {
        self.maxvalue
    }

    /// Check a value that is already known to be numeric.
    pub fn check_number(&self, value: Number) -> Result<(), NumberError> {
        if let Some(minvalue) = self.minvalue {
            if matches!(value.partial_cmp(&minvalue), Some(Ordering::Less)) {
                return Err(NumberError::Low { value, minvalue });
            }
        }
        if let Some(maxvalue) = self.maxvalue {
            if matches!(value.partial_cmp(&maxvalue), Some(Ordering::Greater)) {
                return Err(NumberError::High { value, maxvalue });
            }
        }
        Ok(())
    }
}

impl Rule for Range {
    type Value = Value;

    fn kind(&self) -> &'static str {
        "range"
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let number = value.as_number().ok_or_else(|| NumberError::Type {
            value: value.clone(),
        })?;
        self.check_number(number)?;
        Ok(())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.minvalue, self.maxvalue) {
            (Some(lo), Some(hi)) => write!(f, "{lo} <= value <= {hi}"),
            (Some(lo), None) => write!(f, "value >= {lo}"),
            (None, Some(hi)) => write!(f, "value <= {hi}"),
            (None, None) => f.write_str("any number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity() -> Range {
        Range::between(3, 25)
    }

    #[test]
    fn test_accepts_bounds_inclusive() {
        let rule = quantity();
        for v in [3, 10, 25] {
            assert!(rule.validate(&Value::from(v)).is_ok(), "{v} rejected");
        }
        assert!(rule.validate(&Value::from(3.0)).is_ok());
        assert!(rule.validate(&Value::from(24.99)).is_ok());
    }

    #[test]
    fn test_non_numeric_is_type_error() {
        let rule = quantity();
        for v in [Value::from("V"), Value::from("10"), Value::from(true), Value::Null] {
            let err = rule.validate(&v).unwrap_err();
            assert_eq!(err.kind(), "number_type");
            assert_eq!(err.value(), v);
        }
    }

    #[test]
    fn test_low_carries_minvalue() {
        let err = quantity().validate(&Value::from(-5)).unwrap_err();
        assert_eq!(err.kind(), "number_low");
        assert_eq!(err.minvalue(), Some(Number::Int(3)));
        assert_eq!(err.to_string(), "Expected -5 >= 3");
    }

    #[test]
    fn test_high_carries_maxvalue() {
        let err = quantity().validate(&Value::from(100)).unwrap_err();
        assert_eq!(err.kind(), "number_high");
        assert_eq!(err.maxvalue(), Some(Number::Int(25)));
        assert_eq!(err.to_string(), "Expected 100 <= 25");
    }

    #[test]
    fn test_open_bounds() {
        assert!(Range::at_least(0).validate(&Value::from(i64::MAX)).is_ok());
        assert!(Range::at_most(0).validate(&Value::from(i64::MIN)).is_ok());
        assert!(Range::unbounded().validate(&Value::from(-1e300)).is_ok());
        assert_eq!(
            Range::at_least(0).validate(&Value::from(-1)).unwrap_err().kind(),
            "number_low"
        );
    }

    #[test]
    fn test_nan_violates_no_bound() {
        let nan = Value::from(f64::NAN);
        assert!(quantity().validate(&nan).is_ok());
        assert!(Range::at_least(3).validate(&nan).is_ok());
        assert!(Range::at_most(1).validate(&nan).is_ok());
        assert!(Range::unbounded().validate(&nan).is_ok());
        assert!(quantity().validate(&Value::parse_lenient("nan")).is_ok());
    }

    #[test]
    fn test_large_int_against_float_bound() {
        let two_53 = 9_007_199_254_740_992i64;
        let err = Range::at_most(two_53 as f64)
            .validate(&Value::from(two_53 + 1))
            .unwrap_err();
        assert_eq!(err.kind(), "number_high");
        assert!(Range::at_most(two_53 as f64).validate(&Value::from(two_53)).is_ok());

        let err = Range::at_least(-(two_53 as f64))
            .validate(&Value::from(-two_53 - 1))
            .unwrap_err();
        assert_eq!(err.kind(), "number_low");
    }

    #[test]
    fn test_inverted_bounds_reject_everything() {
        let rule = Range::between(10, 5);
        assert_eq!(rule.validate(&Value::from(7)).unwrap_err().kind(), "number_low");
        assert_eq!(rule.validate(&Value::from(12)).unwrap_err().kind(), "number_high");
    }

    #[test]
    fn test_display() {
        assert_eq!(quantity().to_string(), "3 <= value <= 25");
        assert_eq!(Range::at_least(0.5).to_string(), "value >= 0.5");
        assert_eq!(Range::at_most(9).to_string(), "value <= 9");
        assert_eq!(Range::unbounded().to_string(), "any number");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Numbers inside the bounds are accepted, and stay accepted.
        #[test]
        fn inside_bounds_accepted(lo in -1000i64..1000, span in 0i64..1000, offset in 0i64..1000) {
            let hi = lo + span;
            let v = lo + offset % (span + 1);
            let rule = Range::between(lo, hi);
            prop_assert!(rule.validate(&Value::from(v)).is_ok());
            prop_assert!(rule.validate(&Value::from(v)).is_ok());
        }

        /// Numbers below the minimum report the minimum.
        #[test]
        fn below_min_is_low(lo in -1000i64..1000, below in 1i64..1000) {
            let rule = Range::between(lo, lo + 10);
            let err = rule.validate(&Value::from(lo - below)).unwrap_err();
            prop_assert_eq!(err.kind(), "number_low");
            prop_assert_eq!(err.minvalue(), Some(Number::Int(lo)));
        }

        /// Numbers above the maximum report the maximum.
        #[test]
        fn above_max_is_high(hi in -1000i64..1000, above in 1i64..1000) {
            let rule = Range::between(hi - 10, hi);
            let err = rule.validate(&Value::from(hi + above)).unwrap_err();
            prop_assert_eq!(err.kind(), "number_high");
            prop_assert_eq!(err.maxvalue(), Some(Number::Int(hi)));
        }

        /// Integers above a float maximum are rejected however large they are.
        #[test]
        fn int_above_float_max_is_high(base in (1i64 << 53)..(1i64 << 62), above in 1i64..1024) {
            let max = base as f64;
            let v = (max as i64).saturating_add(above);
            let err = Range::at_most(max).validate(&Value::from(v)).unwrap_err();
            prop_assert_eq!(err.kind(), "number_high");
        }

        /// Strings are a type error no matter how numeric they look.
        #[test]
        fn strings_are_type_errors(s in "[0-9a-z]{0,6}") {
            let err = Range::between(3, 25).validate(&Value::from(s.as_str())).unwrap_err();
            prop_assert_eq!(err.kind(), "number_type");
        }
    }
}
