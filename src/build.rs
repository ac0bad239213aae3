//! Fragment builder — turns an operator application into a `BoundExpr`.

use crate::catalog::{OperandCoercion, OperatorDescriptor};
use crate::coerce;
use crate::expr::{BoundExpr, SqlOperand};
use crate::model::Operand;
use crate::Result;

/// Apply a descriptor to a left expression and a right operand.
///
/// The left expression nests as-is; the right operand is coerced per the
/// descriptor's rule. Path concatenation contributes the coerced path's
/// text as a bound literal, not a nested fragment — at the database level
/// `||` is text concatenation.
pub fn apply(desc: &OperatorDescriptor, left: BoundExpr, right: Operand) -> Result<BoundExpr> {
    let right = match desc.coercion {
        OperandCoercion::None => SqlOperand::Literal(coerce::to_literal(right)?),
        OperandCoercion::Array(dialect) => {
            SqlOperand::Array(coerce::to_tagged_array(right, dialect)?)
        }
        OperandCoercion::Path => SqlOperand::Literal(coerce::to_label_path(right)?.path),
    };

    Ok(BoundExpr::apply(
        desc.result,
        desc.template,
        SqlOperand::Expr(Box::new(left)),
        right,
    ))
}
