//! Harness tests - config to printed output

use std::path::PathBuf;

use twig_cli::{Config, Outcome, OutputFormat, run};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run_to_string(config: &Config) -> String {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_demo_queries() {
    let output = run_to_string(&Config::default());
    assert_eq!(
        output,
        "span: [span-1, span-2, span-3, span-4, span-5]\n\
         .note: [span-1, para-1, span-5]\n\
         label: [lbl-1]\n"
    );
}

#[test]
fn test_sample_from_body_includes_sibling_subtree() {
    let config = Config {
        root: None,
        selectors: vec!["span".into(), ".randomSpan".into()],
        ..Config::default()
    };
    let output = run_to_string(&config);
    assert_eq!(
        output,
        "span: [span-1, span-2, span-3, span-4, span-5, span-6]\n\
         .randomSpan: [span-6]\n"
    );
}

#[test]
fn test_invalid_selector_is_reported_not_fatal() {
    let config = Config {
        selectors: vec!["".into(), "div".into()],
        ..Config::default()
    };
    let mut out = Vec::new();
    let reports = run(&config, &mut out).unwrap();

    assert_eq!(reports[0].outcome, Outcome::Error("Invalid selector".into()));
    assert!(matches!(&reports[1].outcome, Outcome::Matches(ids) if ids.len() == 3));
}

#[test]
fn test_json_tree_file() {
    let config = Config {
        tree: Some(fixture("article.json")),
        root: None,
        selectors: vec![".note".into(), "p".into()],
        format: OutputFormat::Json,
        ..Config::default()
    };
    let output = run_to_string(&config);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            {"selector": ".note", "matches": ["intro", "intro-p", "body-p2"]},
            {"selector": "p", "matches": ["intro-p", "body-p1", "body-p2"]}
        ])
    );
}

#[test]
fn test_root_option() {
    let config = Config {
        tree: Some(fixture("article.json")),
        root: Some("body".into()),
        selectors: vec!["p".into()],
        print_tree: true,
        ..Config::default()
    };
    let output = run_to_string(&config);
    assert_eq!(
        output,
        "<section> body\n  <p> body-p1\n  <p> body-p2 .note\np: [body-p1, body-p2]\n"
    );
}

#[test]
fn test_unknown_root_fails() {
    let config = Config {
        root: Some("missing".into()),
        ..Config::default()
    };
    let err = run(&config, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("No node with identity 'missing'"));
}

#[test]
fn test_invalid_tree_file_fails() {
    let config = Config {
        tree: Some(fixture("invalid.json")),
        root: None,
        ..Config::default()
    };
    let err = run(&config, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("empty tag name"), "{err:#}");
}

#[test]
fn test_missing_tree_file_fails() {
    let config = Config {
        tree: Some(fixture("does-not-exist.json")),
        ..Config::default()
    };
    let err = run(&config, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read tree file"));
}
