//! Registry — resolves `(path type, operator name)` at invocation time.

use std::fmt;
use std::sync::OnceLock;

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::build;
use crate::expr::BoundExpr;
use crate::model::Operand;
use crate::{Error, Result};

use super::ops::{OperatorDescriptor, LTREE_ARRAY_OPERATORS, LTREE_OPERATORS};

/// Type identifier an operator table is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// A scalar `ltree` column.
    Ltree,
    /// An `ltree[]` column.
    LtreeArray,
}

impl PathType {
    pub fn type_name(self) -> &'static str {
        match self {
            PathType::Ltree => "ltree",
            PathType::LtreeArray => "ltree[]",
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Operator registry: one descriptor table per path type.
///
/// Registration happens at construction. Afterwards the registry is only
/// read, so shared use needs no locking.
pub struct Registry {
    ops: HashMap<PathType, HashMap<&'static str, &'static OperatorDescriptor>>,
}

impl Registry {
    /// The built-in catalog: scalar and array ltree tables.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_operators(PathType::Ltree, LTREE_OPERATORS);
        registry.register_operators(PathType::LtreeArray, LTREE_ARRAY_OPERATORS);
        registry
    }

    /// A registry with no operators. Callers supply their own tables via
    /// `register_operators`.
    pub fn empty() -> Self {
        Self { ops: HashMap::new() }
    }

    /// The process-wide catalog, built on first use and immutable after.
    pub fn shared() -> &'static Registry {
        static CATALOG: OnceLock<Registry> = OnceLock::new();
        CATALOG.get_or_init(Registry::new)
    }

    /// Register a table of operators for one path type. A later entry with
    /// the same name shadows an earlier one.
    pub fn register_operators(
        &mut self,
        path_type: PathType,
        table: &'static [OperatorDescriptor],
    ) {
        let slot = self.ops.entry(path_type).or_default();
        for desc in table {
            slot.insert(desc.name, desc);
        }
        debug!(%path_type, operators = table.len(), "registered operator table");
    }

    /// Resolve an operator by exact name.
    pub fn lookup(&self, path_type: PathType, name: &str) -> Result<&'static OperatorDescriptor> {
        self.ops
            .get(&path_type)
            .and_then(|table| table.get(name).copied())
            .ok_or_else(|| Error::OperatorNotSupported {
                path_type,
                name: name.to_owned(),
            })
    }

    /// Invoke an operator on a bound column expression.
    ///
    /// Phase 1: resolve the descriptor. Phase 2: coerce the right operand
    /// and build the fragment.
    pub fn invoke(
        &self,
        path_type: PathType,
        name: &str,
        left: BoundExpr,
        right: impl Into<Operand>,
    ) -> Result<BoundExpr> {
        let desc = self.lookup(path_type, name)?;
        trace!(%path_type, operator = name, "invoking operator");
        build::apply(desc, left, right.into())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
