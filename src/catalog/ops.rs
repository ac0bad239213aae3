//! Operator descriptors — const records, one per catalog entry.

use crate::expr::{ResultKind, SqlTemplate};
use crate::model::PatternDialect;

/// How the right operand is normalized before the fragment is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandCoercion {
    /// Bind the raw pattern text as a single literal.
    None,
    /// Force the operand into a tagged array of the given dialect.
    Array(PatternDialect),
    /// Coerce to a label path; its text becomes the bound literal.
    Path,
}

/// One catalog entry.
///
/// Every template has exactly two operand slots: the bound column
/// expression on the left, the (possibly coerced) query value on the
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub name: &'static str,
    pub template: SqlTemplate,
    pub result: ResultKind,
    pub coercion: OperandCoercion,
}

const fn op(
    name: &'static str,
    infix: &'static str,
    result: ResultKind,
    coercion: OperandCoercion,
) -> OperatorDescriptor {
    OperatorDescriptor {
        name,
        template: SqlTemplate::infix(infix),
        result,
        coercion,
    }
}

/// Operators registered for a scalar `ltree` column.
pub const LTREE_OPERATORS: &[OperatorDescriptor] = &[
    op("match", "~", ResultKind::Bool, OperandCoercion::None),
    op("match_ltextquery", "@", ResultKind::Bool, OperandCoercion::None),
    op("match_any", "?", ResultKind::Bool, OperandCoercion::Array(PatternDialect::Lquery)),
    op("ascendant", "@>", ResultKind::Bool, OperandCoercion::None),
    op("descendant", "<@", ResultKind::Bool, OperandCoercion::None),
    op("contain_ascendant", "@>", ResultKind::Bool, OperandCoercion::Array(PatternDialect::Ltree)),
    op("contain_descendant", "<@", ResultKind::Bool, OperandCoercion::Array(PatternDialect::Ltree)),
    op("+", "||", ResultKind::Path, OperandCoercion::Path),
];

/// Operators registered for an `ltree[]` column.
///
/// The array type carries the richer "find the matching member" variants:
/// each element can match independently, so `?@>` and friends hand back
/// the matching element instead of a boolean. The scalar type only gets
/// whole-value predicates.
pub const LTREE_ARRAY_OPERATORS: &[OperatorDescriptor] = &[
    op("match", "~", ResultKind::Bool, OperandCoercion::None),
    op("match_any", "?", ResultKind::Bool, OperandCoercion::Array(PatternDialect::Lquery)),
    op("contain_any_ltextquery", "@", ResultKind::Bool, OperandCoercion::None),
    op("contain_ancestor", "@>", ResultKind::Bool, OperandCoercion::None),
    op("contain_descendant", "<@", ResultKind::Bool, OperandCoercion::None),
    op("find_ancestor", "?@>", ResultKind::Path, OperandCoercion::None),
    op("find_descendant", "?<@", ResultKind::Path, OperandCoercion::None),
    op("match_any_lquery", "?~", ResultKind::Path, OperandCoercion::None),
    op("match_any_ltextquery", "?@", ResultKind::Path, OperandCoercion::None),
];
