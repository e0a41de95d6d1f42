//! Tree node
//!
//! A node owns its children directly (`Vec<Node>`), so the structure is a
//! strict tree: no parent pointers, no sharing, no cycles.

use serde::{Deserialize, Serialize};

use crate::{AcceptAll, ClassList, DomError, NodeFilter, TreeWalker};

/// Reporting label of a node
///
/// Opaque to the tree itself; queries hand these back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Identity {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identity {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element node
///
/// JSON form: `{"id": "div-1", "tag": "div", "classes": [..], "children": [..]}`
/// with `classes` and `children` optional. Deserialization goes through
/// [`Node::new`], so a document breaking the invariants is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    #[serde(rename = "id")]
    identity: Identity,
    tag: String,
    #[serde(skip_serializing_if = "ClassList::is_empty")]
    classes: ClassList,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Create a node from its parts
    ///
    /// Fails if `tag` or any class name is empty.
    pub fn new<S: Into<String>>(
        identity: impl Into<Identity>,
        tag: impl Into<String>,
        classes: impl IntoIterator<Item = S>,
        children: Vec<Node>,
    ) -> Result<Self, DomError> {
        let identity = identity.into();
        let tag = tag.into();
        let classes: ClassList = classes.into_iter().collect();

        if tag.is_empty() {
            return Err(DomError::EmptyTag { identity });
        }
        if classes.find_empty().is_some() {
            return Err(DomError::EmptyClass { identity });
        }

        Ok(Self {
            identity,
            tag,
            classes,
            children,
        })
    }

    /// Create a childless node without classes
    pub fn leaf(identity: impl Into<Identity>, tag: impl Into<String>) -> Result<Self, DomError> {
        Self::new(identity, tag, std::iter::empty::<String>(), Vec::new())
    }

    /// Start building a node
    pub fn builder(identity: impl Into<Identity>, tag: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            identity: identity.into(),
            tag: tag.into(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Check class membership
    #[inline]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All descendants in document order, excluding this node
    pub fn descendants(&self) -> TreeWalker<'_, AcceptAll> {
        TreeWalker::new(self)
    }

    /// Walk descendants through a filter
    pub fn walker<F: NodeFilter>(&self, filter: F) -> TreeWalker<'_, F> {
        TreeWalker::with_filter(self, filter)
    }

    /// Number of descendants (this node excluded)
    pub fn descendant_count(&self) -> usize {
        self.descendants().count()
    }

    /// Find this node or a descendant by identity (first in document order)
    pub fn find(&self, identity: &str) -> Option<&Node> {
        std::iter::once(self)
            .chain(self.descendants())
            .find(|node| node.identity == identity)
    }
}

/// Builder for [`Node`]
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    identity: Identity,
    tag: String,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl NodeBuilder {
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn classes<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn build(self) -> Result<Node, DomError> {
        tracing::trace!(
            "Building <{}> {} with {} children",
            self.tag,
            self.identity,
            self.children.len()
        );
        Node::new(self.identity, self.tag, self.classes, self.children)
    }
}

#[derive(Deserialize)]
struct RawNode {
    id: Identity,
    tag: String,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl TryFrom<RawNode> for Node {
    type Error = DomError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        Node::new(raw.id, raw.tag, raw.classes, raw.children)
    }
}
