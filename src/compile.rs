use crate::path::FieldPath;
use crate::types::{Clause, CompiledClause, CompiledRule, ConfigError, Rule};

/// Validate a rule set and pre-parse every clause path.
///
/// The compiled rules sit alongside the source rules inside the engine;
/// indices line up one-to-one.
pub(crate) fn compile(rules: &[Rule]) -> Result<Vec<CompiledRule>, ConfigError> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| compile_rule(index, rule))
        .collect()
}

fn compile_rule(index: usize, rule: &Rule) -> Result<CompiledRule, ConfigError> {
    if rule.clauses.is_empty() {
        return Err(ConfigError::NoClauses { rule: index });
    }
    let clauses = rule
        .clauses
        .iter()
        .enumerate()
        .map(|(clause_index, clause)| compile_clause(index, clause_index, clause))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompiledRule {
        clauses,
        gate: rule.gate,
    })
}

fn compile_clause(
    rule: usize,
    index: usize,
    clause: &Clause,
) -> Result<CompiledClause, ConfigError> {
    let path = FieldPath::parse(&clause.path).map_err(|source| ConfigError::InvalidPath {
        rule,
        clause: index,
        path: clause.path.clone(),
        source,
    })?;
    Ok(CompiledClause {
        path,
        operator: clause.operator,
        values: clause.values.clone(),
    })
}
