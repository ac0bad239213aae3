//! # Operator Catalog
//!
//! The fixed table of ltree operators, and the registry that resolves
//! `(path type, operator name)` at invocation time.
//!
//! The catalog is data: descriptors are compile-time constants, the
//! registry is built once and only read afterwards. Dispatch is a table
//! lookup, not dynamic dispatch.

pub mod ops;
pub mod registry;

pub use ops::{OperandCoercion, OperatorDescriptor, LTREE_ARRAY_OPERATORS, LTREE_OPERATORS};
pub use registry::{PathType, Registry};
