//! TreeWalker
//!
//! Pre-order traversal of the descendants of a node, with filtering.
//!
//! The walker keeps an explicit stack of child iterators, one per open
//! ancestor, so traversal depth is bounded by the heap rather than the call
//! stack. The root handed to the walker is never yielded.

use crate::Node;

/// Node filter result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// Yield the node and walk its children
    Accept,
    /// Skip the node but walk its children
    Skip,
    /// Skip the node and its whole subtree
    Reject,
}

/// Node filter trait for custom filtering
pub trait NodeFilter {
    /// Accept, skip or reject a node
    fn accept_node(&self, node: &Node) -> FilterResult;
}

impl<F> NodeFilter for F
where
    F: Fn(&Node) -> FilterResult,
{
    fn accept_node(&self, node: &Node) -> FilterResult {
        self(node)
    }
}

/// Default filter that accepts all nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl NodeFilter for AcceptAll {
    fn accept_node(&self, _node: &Node) -> FilterResult {
        FilterResult::Accept
    }
}

/// Document-order iterator over descendants
#[derive(Debug, Clone)]
pub struct TreeWalker<'a, F = AcceptAll> {
    root: &'a Node,
    stack: Vec<std::slice::Iter<'a, Node>>,
    filter: F,
}

impl<'a> TreeWalker<'a, AcceptAll> {
    /// Walk every descendant of `root`
    pub fn new(root: &'a Node) -> Self {
        Self::with_filter(root, AcceptAll)
    }
}

impl<'a, F: NodeFilter> TreeWalker<'a, F> {
    /// Walk descendants of `root` through `filter`
    pub fn with_filter(root: &'a Node, filter: F) -> Self {
        Self {
            root,
            stack: vec![root.children().iter()],
            filter,
        }
    }

    /// The node traversal started from
    pub fn root(&self) -> &'a Node {
        self.root
    }

    /// Depth of the node last returned by `next` (root children are 1)
    ///
    /// Zero before the first call.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl<'a, F: NodeFilter> Iterator for TreeWalker<'a, F> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            let Some(node) = siblings.next() else {
                self.stack.pop();
                continue;
            };

            match self.filter.accept_node(node) {
                FilterResult::Accept => {
                    self.stack.push(node.children().iter());
                    return Some(node);
                }
                FilterResult::Skip => self.stack.push(node.children().iter()),
                FilterResult::Reject => {}
            }
        }
    }
}

impl<F: NodeFilter> std::iter::FusedIterator for TreeWalker<'_, F> {}
