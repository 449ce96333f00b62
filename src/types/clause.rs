use serde::Deserialize;
use serde_json::Value;

use super::operator::Operator;

/// A single path/operator/values comparison within a rule.
///
/// The path selects a variable out of the fact; the operator compares
/// that variable against each comparison value. Clauses are built in
/// code via [`clause()`] or deserialized from JSON:
///
/// ```json
/// { "path": "user.age", "operator": "greaterThan", "values": 21 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Clause {
    pub path: String,
    pub operator: Operator,
    pub values: ClauseValues,
}

impl Clause {
    /// A clause comparing the variable against one value.
    pub fn new(path: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            operator,
            values: ClauseValues::One(value.into()),
        }
    }

    /// A clause satisfied only if **every** value satisfies the operator
    /// against the same resolved variable.
    pub fn all<V>(path: impl Into<String>, operator: Operator, values: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Self {
            path: path.into(),
            operator,
            values: ClauseValues::Many(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// The comparison value(s) of a clause: a single value, or a sequence
/// that must all match.
///
/// On the wire this is untagged: a JSON array reads as the sequence
/// form, anything else as a single value. To compare the variable
/// against an array *literal*, wrap it in a one-element sequence
/// (`[[1, 2]]` compares the variable against `[1, 2]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClauseValues {
    Many(Vec<Value>),
    One(Value),
}

impl ClauseValues {
    /// The values as a slice, regardless of form.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Self::Many(values) => values,
            Self::One(value) => std::slice::from_ref(value),
        }
    }
}

impl From<Value> for ClauseValues {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Value>> for ClauseValues {
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}

/// Start building a clause against the given path.
///
/// ```
/// use gavel::clause;
///
/// let adult = clause("user.age").greater_than_or_equal_to(18);
/// let named = clause("user.name").starts_with("a");
/// ```
pub fn clause(path: impl Into<String>) -> ClauseBuilder {
    ClauseBuilder { path: path.into() }
}

/// Builder returned by [`clause()`], with one method per operator.
#[derive(Debug, Clone)]
pub struct ClauseBuilder {
    path: String,
}

impl ClauseBuilder {
    fn build(self, operator: Operator, value: impl Into<Value>) -> Clause {
        Clause::new(self.path, operator, value)
    }

    #[must_use]
    pub fn equals(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::Equals, value)
    }

    #[must_use]
    pub fn strict_equals(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::StrictEquals, value)
    }

    #[must_use]
    pub fn starts_with(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::StartsWith, value)
    }

    #[must_use]
    pub fn ends_with(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::EndsWith, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::Contains, value)
    }

    #[must_use]
    pub fn greater_than(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::GreaterThan, value)
    }

    #[must_use]
    pub fn greater_than_or_equal_to(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::GreaterThanOrEqualTo, value)
    }

    #[must_use]
    pub fn less_than(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::LessThan, value)
    }

    #[must_use]
    pub fn less_than_or_equal_to(self, value: impl Into<Value>) -> Clause {
        self.build(Operator::LessThanOrEqualTo, value)
    }

    /// Finish with an explicit operator and a match-all value sequence.
    #[must_use]
    pub fn all<V>(self, operator: Operator, values: V) -> Clause
    where
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        Clause::all(self.path, operator, values)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_single_value() {
        let c = clause("user.age").greater_than(21);
        assert_eq!(c.path, "user.age");
        assert_eq!(c.operator, Operator::GreaterThan);
        assert_eq!(c.values, ClauseValues::One(json!(21)));
    }

    #[test]
    fn builder_covers_every_operator() {
        let cases = [
            (clause("p").equals(1), Operator::Equals),
            (clause("p").strict_equals(1), Operator::StrictEquals),
            (clause("p").starts_with("a"), Operator::StartsWith),
            (clause("p").ends_with("a"), Operator::EndsWith),
            (clause("p").contains("a"), Operator::Contains),
            (clause("p").greater_than(1), Operator::GreaterThan),
            (
                clause("p").greater_than_or_equal_to(1),
                Operator::GreaterThanOrEqualTo,
            ),
            (clause("p").less_than(1), Operator::LessThan),
            (
                clause("p").less_than_or_equal_to(1),
                Operator::LessThanOrEqualTo,
            ),
        ];
        for (c, op) in cases {
            assert_eq!(c.operator, op);
        }
    }

    #[test]
    fn builder_match_all_sequence() {
        let c = clause("tags").all(Operator::Contains, ["a", "b"]);
        assert_eq!(c.values, ClauseValues::Many(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn values_as_slice() {
        assert_eq!(ClauseValues::One(json!(1)).as_slice(), &[json!(1)]);
        assert_eq!(
            ClauseValues::Many(vec![json!(1), json!(2)]).as_slice(),
            &[json!(1), json!(2)]
        );
        assert!(ClauseValues::Many(vec![]).as_slice().is_empty());
    }

    #[test]
    fn deserialize_single_value() {
        let c: Clause =
            serde_json::from_value(json!({"path": "age", "operator": "equals", "values": 30}))
                .unwrap();
        assert_eq!(c.values, ClauseValues::One(json!(30)));
    }

    #[test]
    fn deserialize_value_sequence() {
        let c: Clause = serde_json::from_value(
            json!({"path": "tags", "operator": "contains", "values": ["a", "b"]}),
        )
        .unwrap();
        assert_eq!(c.values, ClauseValues::Many(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn deserialize_wrapped_array_literal() {
        // A one-element sequence holding an array compares against the
        // array itself.
        let c: Clause = serde_json::from_value(
            json!({"path": "pair", "operator": "equals", "values": [[1, 2]]}),
        )
        .unwrap();
        assert_eq!(c.values.as_slice(), &[json!([1, 2])]);
    }

    #[test]
    fn deserialize_rejects_bad_operator() {
        let err = serde_json::from_value::<Clause>(
            json!({"path": "age", "operator": "biggerThan", "values": 1}),
        );
        assert!(err.is_err());
    }
}
