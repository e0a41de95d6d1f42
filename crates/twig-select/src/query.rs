//! Query engine
//!
//! Every query walks the descendants of the root in document order (pre-order,
//! siblings left to right) and tests each node against the selector. The root
//! itself is never a candidate. A matching node is still descended into, so a
//! match and its matching descendants are all reported, ancestor first.

use twig_dom::{FilterResult, Identity, Node, NodeFilter, TreeWalker};

use crate::{QueryError, Selector};

/// Walker filter: yield matches, keep walking through everything else
#[derive(Debug, Clone, Copy)]
struct SelectorFilter<'s>(&'s Selector);

impl NodeFilter for SelectorFilter<'_> {
    #[inline]
    fn accept_node(&self, node: &Node) -> FilterResult {
        if self.0.matches(node) {
            FilterResult::Accept
        } else {
            FilterResult::Skip
        }
    }
}

/// Lazy iterator over the descendants matching a selector
#[derive(Debug, Clone)]
pub struct Matches<'a, 's> {
    walker: TreeWalker<'a, SelectorFilter<'s>>,
}

impl<'a> Iterator for Matches<'a, '_> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.walker.next()?;
        tracing::trace!("Matched <{}> {}", node.tag(), node.identity());
        Some(node)
    }
}

impl std::iter::FusedIterator for Matches<'_, '_> {}

/// Matching descendants of `root`, in document order
///
/// The selector is already validated, so this cannot fail.
pub fn select<'a, 's>(root: &'a Node, selector: &'s Selector) -> Matches<'a, 's> {
    Matches {
        walker: TreeWalker::with_filter(root, SelectorFilter(selector)),
    }
}

/// Identities of all descendants of `root` matching `selector`
///
/// `selector` may be a `&str`, `String`, `Option<&str>`, a JSON value or a
/// parsed [`Selector`]. Anything other than a non-empty string fails with
/// [`QueryError::InvalidSelector`] before the tree is touched. No match is
/// an empty `Vec`, not an error.
pub fn query<S>(root: &Node, selector: S) -> Result<Vec<Identity>, QueryError>
where
    S: TryInto<Selector, Error = QueryError>,
{
    let selector = selector.try_into()?;
    tracing::debug!("Querying '{}' under {}", selector, root.identity());

    let found: Vec<Identity> = select(root, &selector)
        .map(|node| node.identity().clone())
        .collect();

    tracing::debug!("'{}' matched {} nodes", selector, found.len());
    Ok(found)
}

/// Like [`query`], returning the nodes themselves
pub fn query_nodes<S>(root: &Node, selector: S) -> Result<Vec<&Node>, QueryError>
where
    S: TryInto<Selector, Error = QueryError>,
{
    let selector = selector.try_into()?;
    tracing::debug!("Querying nodes '{}' under {}", selector, root.identity());
    Ok(select(root, &selector).collect())
}

/// Identity of the first match in document order
pub fn query_first<S>(root: &Node, selector: S) -> Result<Option<Identity>, QueryError>
where
    S: TryInto<Selector, Error = QueryError>,
{
    let selector = selector.try_into()?;
    Ok(select(root, &selector).next().map(|node| node.identity().clone()))
}

/// Number of matching descendants
pub fn count<S>(root: &Node, selector: S) -> Result<usize, QueryError>
where
    S: TryInto<Selector, Error = QueryError>,
{
    let selector = selector.try_into()?;
    Ok(select(root, &selector).count())
}
