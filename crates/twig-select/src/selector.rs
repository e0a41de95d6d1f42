//! Selector token
//!
//! A selector is exactly one token. A leading `.` makes it a class selector,
//! anything else is compared against the tag name verbatim. There is no
//! combinator syntax: `.note ~ span` is a class selector for the class
//! `note ~ span`, which no valid node carries.

use std::str::FromStr;

use serde_json::Value;
use twig_dom::Node;

use crate::QueryError;

/// Parsed selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Bare token: tag name equality
    Tag(String),
    /// `.`-prefixed token: class membership (prefix stripped)
    Class(String),
}

impl Selector {
    /// Parse a selector token
    ///
    /// The only rejected input is the empty string.
    pub fn parse(token: &str) -> Result<Self, QueryError> {
        if token.is_empty() {
            return Err(QueryError::InvalidSelector);
        }

        Ok(match token.strip_prefix('.') {
            Some(class) => Self::Class(class.to_string()),
            None => Self::Tag(token.to_string()),
        })
    }

    /// Check a single node, ignoring its descendants
    #[inline]
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Tag(tag) => node.tag() == tag,
            Self::Class(class) => node.has_class(class),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag(tag) => f.write_str(tag),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

impl FromStr for Selector {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Selector {
    type Error = QueryError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Self::parse(token)
    }
}

impl TryFrom<String> for Selector {
    type Error = QueryError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

impl TryFrom<&String> for Selector {
    type Error = QueryError;

    fn try_from(token: &String) -> Result<Self, Self::Error> {
        Self::parse(token)
    }
}

/// Absent selector (`None`) is invalid
impl TryFrom<Option<&str>> for Selector {
    type Error = QueryError;

    fn try_from(token: Option<&str>) -> Result<Self, Self::Error> {
        token.ok_or(QueryError::InvalidSelector).and_then(Self::parse)
    }
}

/// Dynamically typed input: only a non-empty JSON string is valid
impl TryFrom<&Value> for Selector {
    type Error = QueryError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(token) => Self::parse(token),
            _ => Err(QueryError::InvalidSelector),
        }
    }
}

impl TryFrom<&Selector> for Selector {
    type Error = QueryError;

    fn try_from(selector: &Selector) -> Result<Self, Self::Error> {
        Ok(selector.clone())
    }
}
