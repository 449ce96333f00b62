use std::fmt;
use std::time::Instant;

use serde_json::Value;

use super::error::ConfigError;
use super::report::EvalReport;
use super::rule::{CompiledRule, Rule};
use crate::cache::{fact_key, CachePolicy, MatchCache};

/// The fact-matching engine: an immutable, ordered rule set plus a
/// content-keyed result cache.
///
/// Rules are validated and their clause paths parsed when the engine is
/// built; evaluation scans them in order and returns the first rule
/// whose clauses hold. Thread-safe and designed to live behind `Arc`.
///
/// # Example
///
/// ```
/// use gavel::{clause, Engine, Outcome, Rule};
/// use serde_json::json;
///
/// let engine = Engine::new(vec![Rule::new(
///     vec![clause("user.age").greater_than(21)],
///     Outcome::literal("Adult"),
/// )])
/// .unwrap();
///
/// let rule = engine.evaluate(&json!({"user": {"age": 30}})).unwrap();
/// assert_eq!(rule.outcome.as_literal(), Some(&json!("Adult")));
/// assert!(engine.evaluate(&json!({"user": {"age": 7}})).is_none());
/// ```
#[derive(Debug)]
pub struct Engine {
    rules: Vec<Rule>,
    compiled: Vec<CompiledRule>,
    cache: MatchCache,
}

impl Engine {
    /// Build an engine over `rules` with the default unbounded cache.
    ///
    /// Rule order is priority order: the first satisfied rule wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a rule has no clauses or a clause path
    /// does not parse.
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        Self::with_policy(rules, CachePolicy::default())
    }

    /// Build an engine with an explicit [`CachePolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a rule has no clauses or a clause path
    /// does not parse.
    pub fn with_policy(rules: Vec<Rule>, policy: CachePolicy) -> Result<Self, ConfigError> {
        let compiled = crate::compile::compile(&rules)?;
        Ok(Self {
            rules,
            compiled,
            cache: MatchCache::new(policy),
        })
    }

    /// Deserialize a JSON array of rule definitions and build an engine.
    ///
    /// # Errors
    ///
    /// Returns [`GavelError`](crate::GavelError) if the JSON does not
    /// parse (including unknown operator or gate names) or the rules
    /// fail validation.
    pub fn from_json(input: &str) -> Result<Self, crate::GavelError> {
        let rules: Vec<Rule> = serde_json::from_str(input)?;
        Ok(Self::new(rules)?)
    }

    /// Read a JSON rule file and build an engine.
    ///
    /// # Errors
    ///
    /// Returns [`GavelError`](crate::GavelError) on I/O, JSON, or
    /// validation failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::GavelError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// Evaluate a fact, returning the first rule whose combined clause
    /// evaluation is true, or `None` when no rule matches.
    ///
    /// The returned reference points into [`rules()`](Self::rules), so
    /// repeated calls with equal fact content return the identical
    /// rule. Results are memoized by fact content under the engine's
    /// cache policy; negative results are remembered too. The engine
    /// never runs a deferred outcome; that stays with the caller.
    #[must_use]
    pub fn evaluate(&self, fact: &Value) -> Option<&Rule> {
        if !self.cache.enabled() {
            return crate::evaluate::evaluate(&self.compiled, fact).map(|i| &self.rules[i]);
        }
        let key = fact_key(fact);
        let index = match self.cache.lookup(&key) {
            Some(cached) => cached,
            None => {
                let result = crate::evaluate::evaluate(&self.compiled, fact);
                self.cache.store(key, result);
                result
            }
        };
        index.map(|i| &self.rules[i])
    }

    /// Evaluate with per-rule diagnostics.
    ///
    /// Runs the scan unconditionally, without consulting or filling the
    /// cache, and reports one trace entry per rule examined, in order,
    /// plus timing.
    pub fn evaluate_detailed(&self, fact: &Value) -> EvalReport {
        let start = Instant::now();
        let (matched, trace) = crate::evaluate::evaluate_traced(&self.compiled, fact);
        EvalReport::new(matched, trace, start.elapsed())
    }

    /// The rules, in priority (construction) order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The cache policy the engine was built with.
    #[must_use]
    pub fn cache_policy(&self) -> CachePolicy {
        self.cache.policy()
    }

    /// Number of distinct facts currently memoized.
    #[must_use]
    pub fn cached_facts(&self) -> usize {
        self.cache.len()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Engine({} rules, {:?} cache)",
            self.rules.len(),
            self.cache.policy()
        )
    }
}
