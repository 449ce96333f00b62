use std::fmt;

use serde::{Deserialize, Serialize};

/// The boolean combinator applied across a rule's per-clause results.
///
/// `And`, `Or`, and `Xnor` consider every result. The binary gates
/// (`Xor`, `Nand`, `Nor`) read exactly the first two results and `Not`
/// reads the first; a missing entry counts as `false` and extra entries
/// are ignored.
///
/// Serialized names are uppercase (`"AND"`, `"XNOR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gate {
    And,
    Or,
    Xor,
    Not,
    Nand,
    Nor,
    Xnor,
}

impl Gate {
    /// Combine a rule's ordered per-clause results into one boolean.
    #[must_use]
    pub fn combine(self, results: &[bool]) -> bool {
        let first = results.first().copied().unwrap_or(false);
        let second = results.get(1).copied().unwrap_or(false);
        match self {
            Self::And => results.iter().all(|&r| r),
            Self::Or => results.iter().any(|&r| r),
            Self::Xor => first != second,
            Self::Not => !first,
            Self::Nand => !(first && second),
            Self::Nor => !first && !second,
            Self::Xnor => results.iter().all(|&r| r) || results.iter().all(|&r| !r),
        }
    }

    /// The gate's wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xnor => "XNOR",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
