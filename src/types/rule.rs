use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::clause::{Clause, ClauseValues};
use super::gate::Gate;
use super::operator::Operator;
use crate::path::FieldPath;

/// A deferred outcome: a computation over the matched fact, run by the
/// caller.
pub type OutcomeFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// What a matched rule carries: a literal value, or a deferred
/// computation.
///
/// The engine never runs a deferred outcome; it hands back the matched
/// [`Rule`] and the caller decides whether and when to call
/// [`Outcome::resolve()`]. Deserializing an outcome always yields the
/// literal form (closures have no wire representation).
#[derive(Clone)]
pub enum Outcome {
    Literal(Value),
    Deferred(OutcomeFn),
}

impl Outcome {
    /// A literal outcome.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// A deferred outcome computed from the fact by the caller.
    pub fn deferred(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self::Deferred(Arc::new(f))
    }

    /// The literal value, if this outcome is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Produce the outcome value for `fact`: clone a literal, or run a
    /// deferred computation. Caller-side only.
    #[must_use]
    pub fn resolve(&self, fact: &Value) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Deferred(f) => f(fact),
        }
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::Literal)
    }
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// One or more clauses, an optional gate combining them, and the
/// outcome delivered when the rule matches.
///
/// Rules are matched in the order they were given to the engine; the
/// first satisfied rule wins. Without a gate, clause results combine
/// with AND.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub clauses: Vec<Clause>,
    #[serde(default)]
    pub gate: Option<Gate>,
    pub outcome: Outcome,
}

impl Rule {
    /// A rule whose clause results combine with AND.
    #[must_use]
    pub fn new(clauses: Vec<Clause>, outcome: Outcome) -> Self {
        Self {
            clauses,
            gate: None,
            outcome,
        }
    }

    /// A rule whose clause results combine through `gate`.
    #[must_use]
    pub fn gated(gate: Gate, clauses: Vec<Clause>, outcome: Outcome) -> Self {
        Self {
            clauses,
            gate: Some(gate),
            outcome,
        }
    }
}

/// A rule whose clause paths have been parsed into [`FieldPath`]s.
///
/// Produced by the compilation step and stored inside the engine
/// alongside the source rules, so evaluation never re-parses a path.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) clauses: Vec<CompiledClause>,
    pub(crate) gate: Option<Gate>,
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledClause {
    pub(crate) path: FieldPath,
    pub(crate) operator: Operator,
    pub(crate) values: ClauseValues,
}
