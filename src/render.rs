//! Placeholder rendering — the boundary where fragments become SQL text.
//!
//! Bind values travel out-of-band: nothing user-supplied is ever spliced
//! into the SQL string. Array binds get a `::<dialect>[]` cast on their
//! placeholder so the store knows how to read the literal.

use crate::expr::{BoundExpr, SqlOperand};
use crate::model::PatternDialect;

/// A value bound to a `$n` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    /// Rendered with a `::<dialect>[]` cast on its placeholder.
    TextArray {
        dialect: PatternDialect,
        elements: Vec<String>,
    },
}

/// Render a fragment to `$n`-placeholder SQL plus its bind values, in
/// placeholder order.
pub fn to_sql(expr: &BoundExpr) -> (String, Vec<BindValue>) {
    let mut sql = String::new();
    let mut binds = Vec::new();
    write_expr(expr, &mut sql, &mut binds);
    (sql, binds)
}

fn write_expr(expr: &BoundExpr, sql: &mut String, binds: &mut Vec<BindValue>) {
    match expr.operands.as_slice() {
        [operand] => write_operand(operand, sql, binds),
        [left, right] => {
            sql.push_str(expr.template.open);
            write_operand(left, sql, binds);
            sql.push(' ');
            sql.push_str(expr.template.infix);
            sql.push(' ');
            write_operand(right, sql, binds);
            sql.push_str(expr.template.close);
        }
        other => {
            // Templates carry at most two slots; anything else is a bug
            // in the builder, not in user input.
            debug_assert!(other.is_empty(), "fragment with {} operand slots", other.len());
        }
    }
}

fn write_operand(operand: &SqlOperand, sql: &mut String, binds: &mut Vec<BindValue>) {
    match operand {
        SqlOperand::Column(name) => {
            sql.push('"');
            sql.push_str(&name.replace('"', "\"\""));
            sql.push('"');
        }
        SqlOperand::Literal(text) => {
            binds.push(BindValue::Text(text.clone()));
            push_placeholder(sql, binds.len());
        }
        SqlOperand::Array(array) => {
            binds.push(BindValue::TextArray {
                dialect: array.dialect(),
                elements: array.elements().to_vec(),
            });
            push_placeholder(sql, binds.len());
            sql.push_str("::");
            sql.push_str(array.dialect().type_name());
            sql.push_str("[]");
        }
        SqlOperand::Expr(inner) => write_expr(inner, sql, binds),
    }
}

fn push_placeholder(sql: &mut String, n: usize) {
    sql.push('$');
    sql.push_str(&n.to_string());
}
