//! # Field Values
//!
//! `Value` is the dynamic input accepted by rules that must type-check what
//! they are handed before checking anything else (the Range rule rejects a
//! string quantity instead of failing to compile it away). `Number` is the
//! numeric subset that range bounds are expressed in.
//!
//! Both render in a repr-like form so error messages show exactly what was
//! rejected: strings are quoted, floats always carry a decimal point.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric value: integer or floating point.
///
/// Comparison is exact across variants: an integer is ordered against a
/// float by value, never by first rounding it to `f64`, so
/// `Int(3) == Float(3.0)` and `Int(2^53 + 1) > Float(2^53)`. NaN is
/// unordered against everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// IEEE-754 double.
    Float(f64),
}

/// 2^63, the first float above every `i64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Order an integer against a float without losing integer precision.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    // Also covers both infinities.
    if f >= I64_END {
        return Some(Ordering::Less);
    }
    if f < -I64_END {
        return Some(Ordering::Greater);
    }
    // `f` is now in [-2^63, 2^63), so its integer part fits in an i64.
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ord => Some(ord),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" on whole floats.
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

/// A dynamically typed field value.
///
/// Serialized untagged, so `5`, `2.5`, `"metal"`, `true` and `null` in
/// JSON or YAML decode to the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean. Not numeric: `true` is rejected by a Range rule.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// IEEE-754 double.
    Float(f64),
    /// UTF-8 string.
    Str(String),
}

impl Value {
    /// The numeric view of this value, if it is an integer or a float.
    ///
    /// No coercion: `Str("5")` and `Bool(true)` are not numbers.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Self::Int(n) => Some(Number::Int(n)),
            Self::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }

    /// Parse a command-line token: integer first, then float, else text.
    pub fn parse_lenient(token: &str) -> Self {
        if let Ok(n) = token.parse::<i64>() {
            return Self::Int(n);
        }
        if let Ok(f) = token.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Str(token.to_string())
    }
}

/// Repr-like rendering used in error messages.
///
/// Strings are written as Rust string literals: double-quoted, with quotes
/// and control characters escaped, so `metle` renders as `"metle"`. Floats
/// keep their decimal point (`3.0`), and `Null` renders as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(n) => Self::Int(n),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Float(n as f64),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}
