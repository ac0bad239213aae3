//! Operand — the right-hand query value accepted by operator invocations.

use serde::{Deserialize, Serialize};

use super::{LabelPath, TaggedArray};

/// The shapes a caller may pass as an operator's right operand.
///
/// Which shapes an operator accepts depends on its coercion rule; a shape
/// the rule cannot digest fails with `UnsupportedOperandShape`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// A single pattern or path string. Multi-pattern coercion treats it
    /// as comma-separated.
    Raw(String),
    /// An ordered list of pattern strings.
    List(Vec<String>),
    /// An array already carrying a dialect tag.
    Tagged(TaggedArray),
    /// A structured label path.
    Path(LabelPath),
}

impl Operand {
    pub fn shape_name(&self) -> &'static str {
        match self {
            Operand::Raw(_) => "STRING",
            Operand::List(_) => "LIST",
            Operand::Tagged(_) => "TAGGED_ARRAY",
            Operand::Path(_) => "PATH",
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<&str> for Operand {
    fn from(v: &str) -> Self { Operand::Raw(v.to_owned()) }
}
impl From<String> for Operand {
    fn from(v: String) -> Self { Operand::Raw(v) }
}
impl From<Vec<String>> for Operand {
    fn from(v: Vec<String>) -> Self { Operand::List(v) }
}
impl From<Vec<&str>> for Operand {
    fn from(v: Vec<&str>) -> Self { Operand::List(v.into_iter().map(Into::into).collect()) }
}
impl From<&[&str]> for Operand {
    fn from(v: &[&str]) -> Self { Operand::List(v.iter().map(|s| (*s).to_owned()).collect()) }
}
impl From<TaggedArray> for Operand {
    fn from(v: TaggedArray) -> Self { Operand::Tagged(v) }
}
impl From<LabelPath> for Operand {
    fn from(v: LabelPath) -> Self { Operand::Path(v) }
}
