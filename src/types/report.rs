use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Per-rule record in an [`EvalReport`]: the per-clause results in
/// clause order, and whether the rule's combination held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTrace {
    rule: usize,
    clause_results: Vec<bool>,
    satisfied: bool,
}

impl RuleTrace {
    pub(crate) fn new(rule: usize, clause_results: Vec<bool>, satisfied: bool) -> Self {
        Self {
            rule,
            clause_results,
            satisfied,
        }
    }

    /// Index of the rule this entry describes.
    #[must_use]
    pub fn rule(&self) -> usize {
        self.rule
    }

    /// One boolean per clause, in clause order.
    #[must_use]
    pub fn clause_results(&self) -> &[bool] {
        &self.clause_results
    }

    /// Whether the rule's gate (or default AND) held over the results.
    #[must_use]
    pub fn satisfied(&self) -> bool {
        self.satisfied
    }
}

/// Detailed evaluation report returned by
/// [`Engine::evaluate_detailed()`](super::engine::Engine::evaluate_detailed).
///
/// Contains the matched rule index (if any), one trace entry per rule
/// examined, and the wall-clock duration of the evaluation. The scan
/// stops at the first match, so the last entry is the matching rule.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct EvalReport {
    matched: Option<usize>,
    trace: Vec<RuleTrace>,
    duration: Duration,
}

impl EvalReport {
    pub(crate) fn new(matched: Option<usize>, trace: Vec<RuleTrace>, duration: Duration) -> Self {
        Self {
            matched,
            trace,
            duration,
        }
    }

    /// Index of the first matching rule, same rule as
    /// [`Engine::evaluate()`](super::engine::Engine::evaluate) returns.
    #[must_use]
    pub fn matched(&self) -> Option<usize> {
        self.matched
    }

    /// Trace entries for the rules examined, in evaluation order.
    #[must_use]
    pub fn trace(&self) -> &[RuleTrace] {
        &self.trace
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matched {
            Some(index) => write!(f, "matched: rule {index}")?,
            None => write!(f, "matched: none")?,
        }
        write!(f, ", examined: {}", self.trace.len())?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
