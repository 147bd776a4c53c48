// tests/unit_config.rs
use std::fs;
use std::path::PathBuf;
use wordgraph_core::config::Config;
use wordgraph_core::constants::MAX_N;
use wordgraph_core::error::GraphError;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("wordgraph.toml");
    let content = "[graph]\nmax_words = 12\n\n[store]\ndir = \"graphs-here\"\n\n[output]\npretty = false\n";
    fs::write(&path, content).unwrap();

    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.graph.max_words, 12);
    assert_eq!(c.store.dir, PathBuf::from("graphs-here"));
    assert!(!c.output.pretty);
}

#[test]
fn test_empty_file_is_defaults() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("wordgraph.toml");
    fs::write(&path, "").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c, Config::default());
    assert_eq!(c.graph.max_words, MAX_N);
}

#[test]
fn test_missing_file_is_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load_from(&d.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_mistyped_value_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("wordgraph.toml");
    fs::write(&path, "[output]\npretty = \"yes\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, GraphError::Toml(_)));
    assert!(err.to_string().starts_with("Invalid config"));
}
