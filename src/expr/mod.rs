//! # SQL Fragments
//!
//! Structured expression fragments produced by operator application.
//! These types are pure data — templates and operands stay separate until
//! a renderer performs placeholder substitution. No behavior, no storage
//! references, no eager SQL text.

pub mod template;
pub mod bound;

pub use template::{ResultKind, SqlTemplate};
pub use bound::{BoundExpr, SqlOperand};
