//! Property-based tests for twig-select queries.
//!
//! Trees are generated as shapes and then numbered in pre-order (`n0` is the
//! root), so document order is plain numeric order of the identities.
use proptest::prelude::*;
use twig_dom::{Identity, Node};
use twig_select::{Selector, query};

#[derive(Debug, Clone)]
struct Shape {
    tag: String,
    classes: Vec<String>,
    children: Vec<Shape>,
}

mod strategies {
    use super::*;

    const TAGS: &[&str] = &["div", "span", "p", "label", "section"];
    const CLASSES: &[&str] = &["note", "mania", "sub1-p1"];

    pub fn tag() -> impl Strategy<Value = String> {
        prop::sample::select(TAGS).prop_map(String::from)
    }

    pub fn classes() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::sample::select(CLASSES).prop_map(String::from), 0..3)
    }

    /// Trees up to depth 5 with at most 6 children per node
    pub fn shape() -> impl Strategy<Value = Shape> {
        let leaf = (tag(), classes()).prop_map(|(tag, classes)| Shape {
            tag,
            classes,
            children: Vec::new(),
        });
        leaf.prop_recursive(5, 64, 6, |inner| {
            (tag(), classes(), prop::collection::vec(inner, 0..6)).prop_map(
                |(tag, classes, children)| Shape {
                    tag,
                    classes,
                    children,
                },
            )
        })
    }

    /// Known tags, known classes, and tokens that mostly match nothing
    pub fn selector() -> impl Strategy<Value = String> {
        prop_oneof![
            tag(),
            prop::sample::select(CLASSES).prop_map(|c| format!(".{c}")),
            "[a-z]{1,4}",
            "\\.[a-z]{1,4}",
        ]
    }
}

fn build(shape: &Shape, next_id: &mut usize) -> Node {
    let identity = format!("n{next_id}");
    *next_id += 1;
    let children = shape.children.iter().map(|c| build(c, next_id)).collect();
    Node::new(identity, shape.tag.clone(), shape.classes.clone(), children).unwrap()
}

fn number(identity: &Identity) -> usize {
    identity.as_str()[1..].parse().unwrap()
}

/// Straightforward recursive reference: test each child, then recurse into it
fn reference(node: &Node, selector: &Selector, out: &mut Vec<Identity>) {
    for child in node.children() {
        if selector.matches(child) {
            out.push(child.identity().clone());
        }
        reference(child, selector, out);
    }
}

proptest! {
    #[test]
    fn test_bounded_by_descendants(shape in strategies::shape(), token in strategies::selector()) {
        let root = build(&shape, &mut 0);
        let found = query(&root, token.as_str()).unwrap();
        prop_assert!(found.len() <= root.descendant_count());
    }

    #[test]
    fn test_document_order(shape in strategies::shape(), token in strategies::selector()) {
        let root = build(&shape, &mut 0);
        let found = query(&root, token.as_str()).unwrap();
        let numbers: Vec<usize> = found.iter().map(number).collect();
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{numbers:?}");
    }

    #[test]
    fn test_root_excluded(shape in strategies::shape(), token in strategies::selector()) {
        let root = build(&shape, &mut 0);
        let found = query(&root, token.as_str()).unwrap();
        prop_assert!(!found.iter().any(|id| id == root.identity()));
    }

    #[test]
    fn test_idempotent(shape in strategies::shape(), token in strategies::selector()) {
        let root = build(&shape, &mut 0);
        prop_assert_eq!(query(&root, token.as_str()), query(&root, token.as_str()));
    }

    #[test]
    fn test_agrees_with_reference(shape in strategies::shape(), token in strategies::selector()) {
        let root = build(&shape, &mut 0);
        let selector = Selector::parse(&token).unwrap();

        let mut expected = Vec::new();
        reference(&root, &selector, &mut expected);

        prop_assert_eq!(query(&root, &selector).unwrap(), expected);
    }

    #[test]
    fn test_every_subtree_is_a_valid_root(shape in strategies::shape(), token in strategies::selector()) {
        let root = build(&shape, &mut 0);
        let whole = query(&root, token.as_str()).unwrap();

        // Results under any subtree are a contiguous slice of the whole result
        for sub in root.descendants() {
            let part = query(sub, token.as_str()).unwrap();
            if let Some(first) = part.first() {
                let start = whole.iter().position(|id| id == first).unwrap();
                prop_assert_eq!(&whole[start..start + part.len()], part.as_slice());
            }
        }
    }
}
