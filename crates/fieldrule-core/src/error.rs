//! # Error Types — Validation Error Taxonomy
//!
//! Every rule failure is a [`ValidationError`]. The taxonomy is single-rooted
//! and closed:
//!
//! ```text
//! ValidationError
//! ├── Membership(MembershipError)
//! ├── Number(NumberError)   Type | Low | High
//! └── Text(TextError)       Short | Long | Predicate
//! ```
//!
//! ## Design
//!
//! - Each variant carries the rejected value and the rule parameter that was
//!   violated (allowed options, bound, predicate name). The context is copied
//!   out of the rule when the error is raised, so an error never borrows from
//!   the rule that produced it.
//! - `Display` names the concrete value and the concrete parameter, never a
//!   generic "invalid value".
//! - Errors serialize as a flat object with a `kind` tag, e.g.
//!   `{"kind":"number_low","value":-5,"minvalue":3}`.

use serde::Serialize;
use thiserror::Error;

use crate::value::{Number, Value};

/// Top-level validation error.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationError {
    /// Value is not in the allowed set.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// Value is not a number or falls outside the configured bounds.
    #[error(transparent)]
    Number(#[from] NumberError),

    /// String length or predicate check failed.
    #[error(transparent)]
    Text(#[from] TextError),
}

/// Value is not one of the allowed options.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "membership")]
#[error("Expected {value} to be one of {}", render_options(.options))]
pub struct MembershipError {
    /// The rejected value.
    pub value: Value,
    /// Every allowed option, in sorted order.
    pub options: Vec<Value>,
}

/// Error from a numeric range rule.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum NumberError {
    /// Value is neither an integer nor a float.
    #[serde(rename = "number_type")]
    #[error("Expected {value} of type int or float")]
    Type {
        /// The rejected value.
        value: Value,
    },

    /// Value is below the configured minimum.
    #[serde(rename = "number_low")]
    #[error("Expected {value} >= {minvalue}")]
    Low {
        /// The rejected value.
        value: Number,
        /// The violated lower bound.
        minvalue: Number,
    },

    /// Value is above the configured maximum.
    #[serde(rename = "number_high")]
    #[error("Expected {value} <= {maxvalue}")]
    High {
        /// The rejected value.
        value: Number,
        /// The violated upper bound.
        maxvalue: Number,
    },
}

/// Error from a text rule.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TextError {
    /// String is shorter than the minimum length.
    #[serde(rename = "text_short")]
    #[error("Expected len({value:?}) >= {minsize}")]
    Short {
        /// The rejected string.
        value: String,
        /// The violated minimum length.
        minsize: usize,
    },

    /// String is longer than the maximum length.
    #[serde(rename = "text_long")]
    #[error("Expected len({value:?}) <= {maxsize}")]
    Long {
        /// The rejected string.
        value: String,
        /// The violated maximum length.
        maxsize: usize,
    },

    /// String has an acceptable length but fails the predicate.
    #[serde(rename = "text_predicate")]
    #[error("Expected {predicate}({value:?}) is true")]
    Predicate {
        /// The rejected string.
        value: String,
        /// Name of the predicate that returned `false`.
        predicate: String,
    },
}

fn render_options(options: &[Value]) -> String {
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

impl NumberError {
    /// The rejected value.
    pub fn value(&self) -> Value {
        match self {
            Self::Type { value } => value.clone(),
            Self::Low { value, .. } | Self::High { value, .. } => Value::from(*value),
        }
    }
}

impl TextError {
    /// The rejected string.
    pub fn value(&self) -> &str {
        match self {
            Self::Short { value, .. } | Self::Long { value, .. } | Self::Predicate { value, .. } => {
                value.as_str()
            }
        }
    }
}

impl ValidationError {
    /// Stable snake_case name of the concrete error kind.
    ///
    /// Matches the `kind` tag in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Membership(_) => "membership",
            Self::Number(NumberError::Type { .. }) => "number_type",
            Self::Number(NumberError::Low { .. }) => "number_low",
            Self::Number(NumberError::High { .. }) => "number_high",
            Self::Text(TextError::Short { .. }) => "text_short",
            Self::Text(TextError::Long { .. }) => "text_long",
            Self::Text(TextError::Predicate { .. }) => "text_predicate",
        }
    }

    /// The rejected value, whatever the error kind.
    pub fn value(&self) -> Value {
        match self {
            Self::Membership(e) => e.value.clone(),
            Self::Number(e) => e.value(),
            Self::Text(e) => Value::Str(e.value().to_string()),
        }
    }

    /// Allowed options, for a membership failure.
    pub fn options(&self) -> Option<&[Value]> {
        match self {
            Self::Membership(e) => Some(e.options.as_slice()),
            _ => None,
        }
    }

    /// The violated lower bound, for a range-low failure.
    pub fn minvalue(&self) -> Option<Number> {
        match self {
            Self::Number(NumberError::Low { minvalue, .. }) => Some(*minvalue),
            _ => None,
        }
    }

    /// The violated upper bound, for a range-high failure.
    pub fn maxvalue(&self) -> Option<Number> {
        match self {
            Self::Number(NumberError::High { maxvalue, .. }) => Some(*maxvalue),
            _ => None,
        }
    }

    /// The violated minimum length, for a too-short string.
    pub fn minsize(&self) -> Option<usize> {
        match self {
            Self::Text(TextError::Short { minsize, .. }) => Some(*minsize),
            _ => None,
        }
    }

    /// The violated maximum length, for a too-long string.
    pub fn maxsize(&self) -> Option<usize> {
        match self {
            Self::Text(TextError::Long { maxsize, .. }) => Some(*maxsize),
            _ => None,
        }
    }

    /// Name of the failed predicate.
    pub fn predicate(&self) -> Option<&str> {
        match self {
            Self::Text(TextError::Predicate { predicate, .. }) => Some(predicate.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low() -> ValidationError {
        NumberError::Low {
            value: Number::Int(-5),
            minvalue: Number::Int(3),
        }
        .into()
    }

    #[test]
    fn test_membership_message_lists_options() {
        let err = MembershipError {
            value: Value::from("metle"),
            options: vec![Value::from("metal"), Value::from("plastic"), Value::from("wood")],
        };
        assert_eq!(
            err.to_string(),
            r#"Expected "metle" to be one of ["metal", "plastic", "wood"]"#
        );
    }

    #[test]
    fn test_number_messages() {
        let ty: ValidationError = NumberError::Type { value: Value::from("V") }.into();
        assert_eq!(ty.to_string(), r#"Expected "V" of type int or float"#);
        assert_eq!(low().to_string(), "Expected -5 >= 3");
        let high: ValidationError = NumberError::High {
            value: Number::Int(100),
            maxvalue: Number::Int(25),
        }
        .into();
        assert_eq!(high.to_string(), "Expected 100 <= 25");
    }

    #[test]
    fn test_text_messages() {
        let short = TextError::Short { value: "WI".into(), minsize: 3 };
        assert_eq!(short.to_string(), r#"Expected len("WI") >= 3"#);
        let long = TextError::Long { value: "SCHIZOPHRENIA".into(), maxsize: 10 };
        assert_eq!(long.to_string(), r#"Expected len("SCHIZOPHRENIA") <= 10"#);
        let pred = TextError::Predicate { value: "Widget".into(), predicate: "isupper".into() };
        assert_eq!(pred.to_string(), r#"Expected isupper("Widget") is true"#);
    }

    #[test]
    fn test_accessors_are_kind_specific() {
        let err = low();
        assert_eq!(err.kind(), "number_low");
        assert_eq!(err.value(), Value::Int(-5));
        assert_eq!(err.minvalue(), Some(Number::Int(3)));
        assert_eq!(err.maxvalue(), None);
        assert_eq!(err.options(), None);
        assert_eq!(err.minsize(), None);
        assert_eq!(err.predicate(), None);
    }

    #[test]
    fn test_serialized_form_carries_kind_tag() {
        let json = serde_json::to_value(low()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "number_low", "value": -5, "minvalue": 3})
        );

        let err: ValidationError = MembershipError {
            value: Value::from("glass"),
            options: vec![Value::from("wood")],
        }
        .into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "membership");
        assert_eq!(json["options"], serde_json::json!(["wood"]));
    }

    #[test]
    fn test_kind_matches_serialized_tag() {
        let errors: Vec<ValidationError> = vec![
            low(),
            NumberError::Type { value: Value::Null }.into(),
            TextError::Long { value: "x".into(), maxsize: 0 }.into(),
            TextError::Predicate { value: "x".into(), predicate: "p".into() }.into(),
        ];
        for err in errors {
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["kind"], err.kind());
        }
    }
}
