//! Harness configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::sample;

/// Selectors run when none are given on the command line
pub const DEFAULT_SELECTORS: &[&str] = &["span", ".note", "label"];

/// Result output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `selector: [ids]` line per selector
    #[default]
    Text,
    /// A JSON array of reports
    Json,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "twig", version, about = "Query a markup tree with a tag or .class selector")]
pub struct Args {
    /// Selector tokens such as `span` or `.note` (defaults to the demo queries)
    pub selectors: Vec<String>,

    /// JSON tree to query instead of the built-in sample document
    #[arg(short, long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Identity of the node to query from (defaults to the tree root)
    #[arg(short, long, value_name = "ID")]
    pub root: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print an outline of the query root before the results
    #[arg(long)]
    pub print_tree: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log: String,
}

/// Harness configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON tree file; `None` uses the sample document
    pub tree: Option<PathBuf>,

    /// Query root identity; `None` uses the tree root
    pub root: Option<String>,

    pub format: OutputFormat,

    pub print_tree: bool,

    /// Default `tracing` filter directive
    pub log_filter: String,

    /// Selectors to run, in order
    pub selectors: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree: None,
            root: Some(sample::DEMO_ROOT.to_string()),
            format: OutputFormat::Text,
            print_tree: false,
            log_filter: "warn".to_string(),
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // Bare `twig` replays the demo queries from the demo root
        let demo = args.selectors.is_empty() && args.tree.is_none();
        let defaults = Config::default();

        Self {
            root: args.root.or(if demo { defaults.root } else { None }),
            selectors: if args.selectors.is_empty() {
                defaults.selectors
            } else {
                args.selectors
            },
            tree: args.tree,
            format: args.format,
            print_tree: args.print_tree,
            log_filter: args.log,
        }
    }
}
