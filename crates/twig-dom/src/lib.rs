//! twig DOM - Markup tree
//!
//! Immutable element tree: every node owns its children outright, so a tree
//! is built bottom-up and only ever read afterwards.

mod classlist;
mod node;
mod tree_walker;

pub use classlist::ClassList;
pub use node::{Identity, Node, NodeBuilder};
pub use tree_walker::{AcceptAll, FilterResult, NodeFilter, TreeWalker};

/// Tree construction error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {identity} has an empty tag name")]
    EmptyTag { identity: Identity },

    #[error("Node {identity} has an empty class name")]
    EmptyClass { identity: Identity },
}
