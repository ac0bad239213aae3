//! Pattern dialects carried on array operands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which pattern language the elements of a tagged array belong to.
///
/// The store needs this tag to interpret an array literal: `ltree`
/// elements are plain paths, `lquery` are structured patterns, and
/// `ltextquery` are full-text style patterns over labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternDialect {
    Ltree,
    Lquery,
    Ltextquery,
}

impl PatternDialect {
    /// The element type name, as used in casts (`$1::lquery[]`).
    pub fn type_name(self) -> &'static str {
        match self {
            PatternDialect::Ltree => "ltree",
            PatternDialect::Lquery => "lquery",
            PatternDialect::Ltextquery => "ltextquery",
        }
    }
}

impl fmt::Display for PatternDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
