use thiserror::Error;

use crate::path::PathError;

/// Structural problems in a rule set, reported when the engine is
/// built. Rules are validated eagerly: a bad rule never reaches
/// evaluation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rule {rule} has no clauses")]
    NoClauses { rule: usize },

    #[error("rule {rule} clause {clause} path '{path}': {source}")]
    InvalidPath {
        rule: usize,
        clause: usize,
        path: String,
        #[source]
        source: PathError,
    },
}
