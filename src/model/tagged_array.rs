//! TaggedArray — pattern strings annotated with their dialect.

use serde::{Deserialize, Serialize};

use super::PatternDialect;

/// An ordered collection of pattern strings plus the dialect tag the
/// store needs to interpret them.
///
/// Built transiently per operator invocation, never persisted. The
/// coercion layer is the sole writer of the tag: `retag` re-stamps
/// without revalidating the elements, last write wins. Element order is
/// preserved into the array literal; matching itself is set-like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedArray {
    dialect: PatternDialect,
    elements: Vec<String>,
}

impl TaggedArray {
    pub fn new(
        dialect: PatternDialect,
        elements: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            dialect,
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dialect(&self) -> PatternDialect {
        self.dialect
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Re-stamp the dialect in place. Elements are not revalidated.
    pub fn retag(&mut self, dialect: PatternDialect) {
        self.dialect = dialect;
    }
}
