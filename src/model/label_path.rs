//! LabelPath — a dotted sequence of labels, the in-memory form of `ltree`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A hierarchical label path: `Top.Science.Astronomy`.
///
/// Holds the canonical dotted text. The label decomposition is derived on
/// demand and never stored. Equality, ordering, and hashing are all by the
/// raw `path` string — this layer does not validate label grammar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabelPath {
    pub path: String,
}

impl LabelPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Labels in order, split on `.`. Empty segments are preserved:
    /// the empty path has exactly one empty label.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// True for a path of a single label (no separator).
    pub fn is_root(&self) -> bool {
        !self.path.contains('.')
    }

    /// The path with its last label removed. `None` for a root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.rsplit_once('.').map(|(head, _)| Self::new(head))
    }

    /// Append one label.
    pub fn child(&self, label: &str) -> Self {
        if self.path.is_empty() {
            Self::new(label)
        } else {
            Self::new(format!("{}.{label}", self.path))
        }
    }
}

impl fmt::Display for LabelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for LabelPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for LabelPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl FromStr for LabelPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
