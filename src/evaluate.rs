use serde_json::Value;

use crate::types::{CompiledClause, CompiledRule, RuleTrace};

/// Scan compiled rules in order and return the index of the first rule
/// whose combined clause evaluation is true.
pub(crate) fn evaluate(rules: &[CompiledRule], fact: &Value) -> Option<usize> {
    rules.iter().position(|rule| rule_matches(rule, fact))
}

/// The same scan, collecting one trace entry per examined rule. Stops
/// after the first match, so the trace covers exactly the rules looked
/// at.
pub(crate) fn evaluate_traced(
    rules: &[CompiledRule],
    fact: &Value,
) -> (Option<usize>, Vec<RuleTrace>) {
    let mut trace = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        let clause_results: Vec<bool> = rule
            .clauses
            .iter()
            .map(|clause| clause_matches(clause, fact))
            .collect();
        let satisfied = combine(rule, &clause_results);
        trace.push(RuleTrace::new(index, clause_results, satisfied));
        if satisfied {
            return (Some(index), trace);
        }
    }
    (None, trace)
}

fn rule_matches(rule: &CompiledRule, fact: &Value) -> bool {
    match rule.gate {
        None => rule
            .clauses
            .iter()
            .all(|clause| clause_matches(clause, fact)),
        Some(gate) => {
            let results: Vec<bool> = rule
                .clauses
                .iter()
                .map(|clause| clause_matches(clause, fact))
                .collect();
            gate.combine(&results)
        }
    }
}

/// A clause holds iff its variable resolves and every comparison value
/// satisfies the operator against it. An unresolved variable fails the
/// clause no matter the operator.
fn clause_matches(clause: &CompiledClause, fact: &Value) -> bool {
    let Some(variable) = clause.path.resolve(fact) else {
        return false;
    };
    clause
        .values
        .as_slice()
        .iter()
        .all(|value| clause.operator.apply(variable, value))
}

fn combine(rule: &CompiledRule, results: &[bool]) -> bool {
    match rule.gate {
        Some(gate) => gate.combine(results),
        None => results.iter().all(|&r| r),
    }
}
