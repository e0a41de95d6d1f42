//! twig selectors
//!
//! Descendant queries over a [`twig_dom::Node`] tree using a single-token
//! selector: a bare tag name (`span`) or a class name prefixed with `.`
//! (`.note`).
//!
//! # Example
//! ```rust
//! use twig_dom::Node;
//!
//! let root = Node::builder("div-1", "div")
//!     .child(Node::builder("span-1", "span").class("note").build()?)
//!     .child(Node::leaf("span-2", "span")?)
//!     .build()?;
//!
//! assert_eq!(twig_select::query(&root, "span")?, ["span-1", "span-2"]);
//! assert_eq!(twig_select::query(&root, ".note")?, ["span-1"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod query;
mod selector;

pub use query::{Matches, count, query, query_first, query_nodes, select};
pub use selector::Selector;

/// Query error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Selector was absent, empty or not a string
    #[error("Invalid selector")]
    InvalidSelector,
}
