//! Operand coercion — normalizes caller-supplied shapes.
//!
//! Every rule here is a deterministic function of its input: failures are
//! programming errors on the caller's side, never transient faults.

use crate::model::{LabelPath, Operand, PatternDialect, TaggedArray};
use crate::{Error, Result};

/// Read a raw database value into a structured path.
///
/// Never fails — this layer does not validate label grammar.
pub fn decode_path(raw: impl Into<String>) -> LabelPath {
    LabelPath::new(raw)
}

/// The text form sent to the database, verbatim.
pub fn encode_path(path: &LabelPath) -> &str {
    &path.path
}

/// Force an operand into a tagged array of the required dialect.
///
/// An array already carrying the right tag passes through untouched; a
/// differently-tagged one is re-stamped in place, last write wins. A
/// single string is treated as comma-separated patterns. List order is
/// preserved — it determines array literal order, not matching semantics.
pub fn to_tagged_array(operand: Operand, dialect: PatternDialect) -> Result<TaggedArray> {
    match operand {
        Operand::Tagged(mut array) => {
            if array.dialect() != dialect {
                array.retag(dialect);
            }
            Ok(array)
        }
        Operand::List(elements) => Ok(TaggedArray::new(dialect, elements)),
        Operand::Raw(patterns) => Ok(TaggedArray::new(dialect, patterns.split(','))),
        other @ Operand::Path(_) => Err(Error::UnsupportedOperandShape {
            expected: "STRING, LIST, or TAGGED_ARRAY",
            got: other.shape_name(),
        }),
    }
}

/// Coerce to a structured path, for concatenation.
pub fn to_label_path(operand: Operand) -> Result<LabelPath> {
    match operand {
        Operand::Path(path) => Ok(path),
        Operand::Raw(raw) => Ok(LabelPath::new(raw)),
        other => Err(Error::UnsupportedOperandShape {
            expected: "STRING or PATH",
            got: other.shape_name(),
        }),
    }
}

/// Pass-through for operators that bind the raw pattern text directly.
pub fn to_literal(operand: Operand) -> Result<String> {
    match operand {
        Operand::Raw(raw) => Ok(raw),
        Operand::Path(path) => Ok(path.path),
        other => Err(Error::UnsupportedOperandShape {
            expected: "STRING or PATH",
            got: other.shape_name(),
        }),
    }
}
