//! # ltree-rs — Typed ltree Query Operators for PostgreSQL
//!
//! A self-contained operator layer for Postgres' hierarchical `ltree`
//! column type: structured label paths, pattern-dialect coercion, and a
//! fixed catalog of operators that compile into tagged SQL fragments.
//!
//! ## Design Principles
//!
//! 1. **Pure data fragments**: `BoundExpr` carries a template and operands —
//!    no SQL string is assembled until the rendering boundary
//! 2. **Static catalog**: operator descriptors are compile-time constants;
//!    dispatch is a table lookup, never dynamic
//! 3. **Coercion owns nothing**: operand normalization is a pure function
//!    over a closed set of input shapes
//! 4. **Binds travel out-of-band**: user-supplied patterns become `$n`
//!    placeholders, never spliced into SQL text
//!
//! ## Quick Start
//!
//! ```rust
//! use ltree_rs::{render, PathAttr};
//!
//! # fn example() -> ltree_rs::Result<()> {
//! // A column bound to the scalar ltree type
//! let path = PathAttr::new("path");
//!
//! // "is this column an ancestor of Top.Science?"
//! let expr = path.ascendant_of("Top.Science")?;
//!
//! let (sql, binds) = render::to_sql(&expr);
//! assert_eq!(sql, r#"("path" @> $1)"#);
//! assert_eq!(binds.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Path Types
//!
//! | Type | Column | Operators |
//! |------|--------|-----------|
//! | `PathType::Ltree` | `ltree` | `match`, `match_ltextquery`, `match_any`, `ascendant`, `descendant`, `contain_ascendant`, `contain_descendant`, `+` |
//! | `PathType::LtreeArray` | `ltree[]` | `match`, `match_any`, `contain_any_ltextquery`, `contain_ancestor`, `contain_descendant`, `find_ancestor`, `find_descendant`, `match_any_lquery`, `match_any_ltextquery` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod expr;
pub mod catalog;
pub mod coerce;
pub mod build;
pub mod render;
pub mod attr;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{LabelPath, Operand, PatternDialect, TaggedArray};

// ============================================================================
// Re-exports: Fragments
// ============================================================================

pub use expr::{BoundExpr, ResultKind, SqlOperand, SqlTemplate};

// ============================================================================
// Re-exports: Catalog
// ============================================================================

pub use catalog::{OperandCoercion, OperatorDescriptor, PathType, Registry};

// ============================================================================
// Re-exports: Coercion and rendering
// ============================================================================

pub use coerce::{decode_path, encode_path};
pub use render::BindValue;

// ============================================================================
// Re-exports: Typed column front-end
// ============================================================================

pub use attr::{PathArrayAttr, PathAttr};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Operator `{name}` is not registered for type {path_type}")]
    OperatorNotSupported { path_type: PathType, name: String },

    #[error("Unsupported operand shape: expected {expected}, got {got}")]
    UnsupportedOperandShape { expected: &'static str, got: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
