//! BoundExpr — the generic "expression with attached SQL payload" container.

use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use crate::model::TaggedArray;

use super::{ResultKind, SqlTemplate};

/// One operand slot in a fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SqlOperand {
    /// A column identifier, quoted by the renderer.
    Column(String),
    /// A text value bound as a driver parameter.
    Literal(String),
    /// A multi-pattern parameter, cast to its dialect's array type.
    Array(TaggedArray),
    /// A nested fragment.
    Expr(Box<BoundExpr>),
}

/// An expression fragment: a literal template plus its operands, in the
/// order the driver expects for placeholder substitution.
///
/// Nothing here is a SQL string yet — escaping and substitution belong to
/// the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundExpr {
    pub kind: ResultKind,
    pub template: SqlTemplate,
    pub operands: SmallVec<[SqlOperand; 2]>,
}

impl BoundExpr {
    /// A leaf fragment referencing a stored column.
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Path,
            template: SqlTemplate::atom(),
            operands: smallvec![SqlOperand::Column(name.into())],
        }
    }

    /// Apply a two-slot template to left and right operands.
    pub fn apply(
        kind: ResultKind,
        template: SqlTemplate,
        left: SqlOperand,
        right: SqlOperand,
    ) -> Self {
        Self {
            kind,
            template,
            operands: smallvec![left, right],
        }
    }
}
