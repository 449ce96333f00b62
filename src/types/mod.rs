mod clause;
mod engine;
mod error;
mod gate;
mod operator;
mod report;
mod rule;

pub use clause::{Clause, ClauseBuilder, ClauseValues, clause};
pub use engine::Engine;
pub use error::ConfigError;
pub use gate::Gate;
pub use operator::Operator;
pub use report::{EvalReport, RuleTrace};
pub use rule::{Outcome, OutcomeFn, Rule};

pub(crate) use rule::{CompiledClause, CompiledRule};
