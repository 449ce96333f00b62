use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The comparison applied between a clause's resolved variable and one
/// comparison value.
///
/// Serialized names are the camelCase wire names (`"equals"`,
/// `"strictEquals"`, `"greaterThanOrEqualTo"`, ...), so rule definitions
/// loaded from JSON use the same spelling as rules built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Equals,
    StrictEquals,
    StartsWith,
    EndsWith,
    Contains,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl Operator {
    /// Apply the operator to a resolved variable and a comparison value.
    ///
    /// Total over all value pairs: a comparison that makes no sense for
    /// the types at hand (ordering a bool, `startsWith` on a number)
    /// returns `false` rather than failing.
    ///
    /// Equality is structural for objects and arrays, with numbers
    /// compared numerically at every depth (`1` equals `1.0`). `Equals`
    /// additionally treats a number and a string that parses as the same
    /// number as equal; `StrictEquals` never crosses types.
    #[must_use]
    pub fn apply(self, variable: &Value, value: &Value) -> bool {
        match self {
            Self::Equals => loose_eq(variable, value),
            Self::StrictEquals => strict_eq(variable, value),
            Self::StartsWith => {
                str_pair(variable, value).is_some_and(|(s, affix)| s.starts_with(affix))
            }
            Self::EndsWith => {
                str_pair(variable, value).is_some_and(|(s, affix)| s.ends_with(affix))
            }
            Self::Contains => contains(variable, value),
            Self::GreaterThan => {
                matches!(ordering(variable, value), Some(Ordering::Greater))
            }
            Self::GreaterThanOrEqualTo => matches!(
                ordering(variable, value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::LessThan => matches!(ordering(variable, value), Some(Ordering::Less)),
            Self::LessThanOrEqualTo => matches!(
                ordering(variable, value),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }

    /// The operator's wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::StrictEquals => "strictEquals",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::Contains => "contains",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEqualTo => "greaterThanOrEqualTo",
            Self::LessThan => "lessThan",
            Self::LessThanOrEqualTo => "lessThanOrEqualTo",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -- Comparison helpers -----------------------------------------------------

/// Structural equality with numeric number comparison at every depth.
fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => number_eq(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| strict_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| strict_eq(x, y)))
        }
        _ => a == b,
    }
}

/// [`strict_eq`] plus number/string coercion at the top level.
fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            numeric(s).is_some_and(|parsed| n.as_f64() == Some(parsed))
        }
        _ => strict_eq(a, b),
    }
}

fn number_eq(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn number_cmp(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y),
        _ => None,
    }
}

/// Ordering between a variable and a value, where one exists.
///
/// Numbers compare numerically and strings lexicographically. A string
/// on either side of a number compares numerically when it parses as a
/// number. Every other pairing is incomparable.
fn ordering(variable: &Value, value: &Value) -> Option<Ordering> {
    match (variable, value) {
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y),
        (Value::String(x), Value::String(y)) => Some(x.as_str().cmp(y.as_str())),
        (Value::Number(x), Value::String(y)) => x.as_f64()?.partial_cmp(&numeric(y)?),
        (Value::String(x), Value::Number(y)) => numeric(x)?.partial_cmp(&y.as_f64()?),
        _ => None,
    }
}

fn contains(variable: &Value, value: &Value) -> bool {
    match variable {
        Value::String(s) => value.as_str().is_some_and(|needle| s.contains(needle)),
        Value::Array(items) => items.iter().any(|item| strict_eq(item, value)),
        _ => false,
    }
}

fn str_pair<'a>(variable: &'a Value, value: &'a Value) -> Option<(&'a str, &'a str)> {
    Some((variable.as_str()?, value.as_str()?))
}

fn numeric(s: &str) -> Option<f64> {
    s.parse().ok()
}
