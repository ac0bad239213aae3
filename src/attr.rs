//! Typed column front-end — operator methods on a bound attribute.
//!
//! The string-keyed `Registry::invoke` stays the dynamic surface; these
//! wrappers give call sites compile-time names for the same catalog.
//! Methods that are not registered for a wrapper's path type simply do
//! not exist on it.

use crate::catalog::{PathType, Registry};
use crate::expr::BoundExpr;
use crate::model::Operand;
use crate::Result;

/// A column bound to the scalar `ltree` type.
#[derive(Debug, Clone)]
pub struct PathAttr {
    expr: BoundExpr,
}

impl PathAttr {
    pub fn new(column: impl Into<String>) -> Self {
        Self { expr: BoundExpr::column(column) }
    }

    /// Wrap an existing fragment, e.g. the result of `concat`.
    pub fn from_expr(expr: BoundExpr) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &BoundExpr {
        &self.expr
    }

    /// `path ~ lquery`
    pub fn matches(&self, query: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match", query)
    }

    /// `path @ ltextquery`
    pub fn matches_ltextquery(&self, query: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match_ltextquery", query)
    }

    /// `path ? lquery[]` — does any pattern in the set match.
    pub fn matches_any(&self, queries: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match_any", queries)
    }

    /// `path @> other` — is this path an ancestor of the query path.
    pub fn ascendant_of(&self, other: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("ascendant", other)
    }

    /// `path <@ other` — is this path a descendant of the query path.
    pub fn descendant_of(&self, other: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("descendant", other)
    }

    /// `path @> ltree[]` — an ancestor of any path in the set.
    pub fn contains_ascendant(&self, paths: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("contain_ascendant", paths)
    }

    /// `path <@ ltree[]` — a descendant of any path in the set.
    pub fn contains_descendant(&self, paths: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("contain_descendant", paths)
    }

    /// `path || other` — concatenation. The result is itself a path
    /// attribute, so further operators can chain off it.
    pub fn concat(&self, other: impl Into<Operand>) -> Result<PathAttr> {
        self.invoke("+", other).map(PathAttr::from_expr)
    }

    fn invoke(&self, name: &str, operand: impl Into<Operand>) -> Result<BoundExpr> {
        Registry::shared().invoke(PathType::Ltree, name, self.expr.clone(), operand)
    }
}

/// A column bound to the `ltree[]` type.
#[derive(Debug, Clone)]
pub struct PathArrayAttr {
    expr: BoundExpr,
}

impl PathArrayAttr {
    pub fn new(column: impl Into<String>) -> Self {
        Self { expr: BoundExpr::column(column) }
    }

    pub fn from_expr(expr: BoundExpr) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &BoundExpr {
        &self.expr
    }

    /// `ltree[] ~ lquery` — some element matches.
    pub fn matches(&self, query: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match", query)
    }

    /// `ltree[] ? lquery[]` — some element matches some pattern.
    pub fn matches_any(&self, queries: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match_any", queries)
    }

    /// `ltree[] @ ltextquery`
    pub fn contains_any_ltextquery(&self, query: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("contain_any_ltextquery", query)
    }

    /// `ltree[] @> other` — some element is an ancestor of the path.
    pub fn contains_ancestor(&self, other: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("contain_ancestor", other)
    }

    /// `ltree[] <@ other` — some element is a descendant of the path.
    pub fn contains_descendant(&self, other: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("contain_descendant", other)
    }

    /// `ltree[] ?@> other` — the first element that is an ancestor.
    pub fn find_ancestor(&self, other: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("find_ancestor", other)
    }

    /// `ltree[] ?<@ other` — the first element that is a descendant.
    pub fn find_descendant(&self, other: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("find_descendant", other)
    }

    /// `ltree[] ?~ lquery` — the first element matching the pattern.
    pub fn match_any_lquery(&self, query: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match_any_lquery", query)
    }

    /// `ltree[] ?@ ltextquery` — the first element matching the query.
    pub fn match_any_ltextquery(&self, query: impl Into<Operand>) -> Result<BoundExpr> {
        self.invoke("match_any_ltextquery", query)
    }

    fn invoke(&self, name: &str, operand: impl Into<Operand>) -> Result<BoundExpr> {
        Registry::shared().invoke(PathType::LtreeArray, name, self.expr.clone(), operand)
    }
}
