mod cache;
mod compile;
mod error;
mod evaluate;
mod path;
mod types;

pub use cache::CachePolicy;
pub use error::GavelError;
pub use path::{FieldPath, PathError, Segment};
pub use types::{
    Clause, ClauseBuilder, ClauseValues, ConfigError, Engine, EvalReport, Gate, Operator, Outcome,
    OutcomeFn, Rule, RuleTrace, clause,
};
