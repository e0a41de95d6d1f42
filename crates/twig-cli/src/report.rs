//! Query reports and tree outline

use std::io::Write;

use serde::Serialize;
use twig_dom::{Identity, Node};

/// Outcome of one selector against the query root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub selector: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Matches(Vec<Identity>),
    Error(String),
}

impl QueryReport {
    pub fn run(root: &Node, selector: &str) -> Self {
        let outcome = match twig_select::query(root, selector) {
            Ok(ids) => Outcome::Matches(ids),
            Err(err) => Outcome::Error(err.to_string()),
        };
        Self {
            selector: selector.to_string(),
            outcome,
        }
    }
}

impl std::fmt::Display for QueryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.selector)?;
        match &self.outcome {
            Outcome::Matches(ids) => {
                f.write_str("[")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{id}")?;
                }
                f.write_str("]")
            }
            Outcome::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// Write an indented outline of `root` and its descendants
pub fn write_outline(root: &Node, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", describe(root))?;

    let mut walker = root.descendants();
    while let Some(node) = walker.next() {
        writeln!(out, "{}{}", "  ".repeat(walker.depth()), describe(node))?;
    }
    Ok(())
}

fn describe(node: &Node) -> String {
    let mut line = format!("<{}> {}", node.tag(), node.identity());
    for class in node.classes().iter() {
        line.push_str(" .");
        line.push_str(class);
    }
    line
}
