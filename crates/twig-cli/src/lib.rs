//! twig command line harness
//!
//! Loads a tree (the built-in sample or a JSON file), picks the query root
//! and prints the result of every selector.

mod config;
mod report;
pub mod sample;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use twig_dom::Node;

pub use config::{Args, Config, DEFAULT_SELECTORS, OutputFormat};
pub use report::{Outcome, QueryReport, write_outline};

/// Load a JSON tree, or the sample document when `path` is `None`
pub fn load_tree(path: Option<&Path>) -> anyhow::Result<Node> {
    let Some(path) = path else {
        return Ok(sample::document()?);
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree file {}", path.display()))?;
    let tree: Node = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse tree file {}", path.display()))?;

    tracing::info!(
        "Loaded {} with {} nodes",
        path.display(),
        tree.descendant_count() + 1
    );
    Ok(tree)
}

/// Run every configured selector and write the reports to `out`
pub fn run(config: &Config, out: &mut dyn Write) -> anyhow::Result<Vec<QueryReport>> {
    let tree = load_tree(config.tree.as_deref())?;
    let root = match &config.root {
        Some(identity) => tree
            .find(identity)
            .with_context(|| format!("No node with identity '{identity}'"))?,
        None => &tree,
    };

    tracing::info!(
        "Running {} selectors from {}",
        config.selectors.len(),
        root.identity()
    );

    if config.print_tree {
        write_outline(root, out)?;
    }

    let reports: Vec<QueryReport> = config
        .selectors
        .iter()
        .map(|selector| QueryReport::run(root, selector))
        .collect();

    match config.format {
        OutputFormat::Text => {
            for report in &reports {
                writeln!(out, "{report}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }

    Ok(reports)
}
