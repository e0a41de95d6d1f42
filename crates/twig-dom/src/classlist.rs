//! Class list
//!
//! Ordered class names of an element, read-only once the node is built.

use serde::{Deserialize, Serialize};

/// Ordered list of class names (e.g. the `class` attribute)
///
/// Entries keep their input order and duplicates are kept as given; lookups
/// are membership tests, so neither affects matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string
    pub fn from_string(s: &str) -> Self {
        let tokens = s.split_whitespace().map(|s| s.to_string()).collect();
        Self { tokens }
    }

    /// Number of class names
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Class name at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|s| s.as_str())
    }

    /// Check if a class name is present
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Value as space-joined string
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// First empty entry, if any
    pub(crate) fn find_empty(&self) -> Option<usize> {
        self.tokens.iter().position(|t| t.is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
