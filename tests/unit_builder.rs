// tests/unit_builder.rs
//! Tests for graph construction from text.

use proptest::prelude::*;
use wordgraph_core::constants::MAX_N;
use wordgraph_core::graph::{build, WordGraph};

fn weight(graph: &WordGraph, u: &str, v: &str) -> Option<f64> {
    graph.weight(u, v)
}

#[test]
fn test_top_three_scenario() {
    let graph = build("the cat sat. the cat ran. the dog sat.", 3);

    assert_eq!(graph.vertex_count, 3);
    let vertices: Vec<_> = graph.vertices().collect();
    assert_eq!(vertices, vec!["cat", "sat", "the"]);
    assert_eq!(graph.word_frequencies["the"], 3);
    assert_eq!(graph.word_frequencies["cat"], 2);
    assert_eq!(graph.word_frequencies["sat"], 2);

    assert_eq!(weight(&graph, "the", "cat"), Some(2.0));
    assert_eq!(weight(&graph, "the", "sat"), Some(2.0));
    // "cat" and "sat" share the first sentence.
    assert_eq!(weight(&graph, "cat", "sat"), Some(1.0));
    assert_eq!(graph.edge_count, 6);
}

#[test]
fn test_pairs_that_never_share_a_sentence_have_no_edge() {
    let graph = build("the cat ran. the dog sat. the cat. the sat.", 3);

    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["cat", "sat", "the"]);
    assert_eq!(weight(&graph, "the", "cat"), Some(2.0));
    assert_eq!(weight(&graph, "cat", "the"), Some(2.0));
    assert_eq!(weight(&graph, "the", "sat"), Some(2.0));
    assert_eq!(weight(&graph, "cat", "sat"), None);
    assert_eq!(weight(&graph, "sat", "cat"), None);
    assert_eq!(graph.edge_count, 4);
}

#[test]
fn test_frequency_ties_use_first_seen_order() {
    // All words appear twice; the first three encountered win.
    let graph = build("delta alpha charlie bravo. delta alpha charlie bravo.", 3);
    assert_eq!(
        graph.vertices().collect::<Vec<_>>(),
        vec!["alpha", "charlie", "delta"]
    );
}

#[test]
fn test_max_words_fallback() {
    let text: String = (0..150).map(|i| format!("w{i} ")).collect();

    assert_eq!(build(&text, 0).vertex_count, MAX_N);
    assert_eq!(build(&text, MAX_N + 1).vertex_count, MAX_N);
    assert_eq!(build(&text, 7).vertex_count, 7);
    assert_eq!(build("one two", 50).vertex_count, 2, "bounded by distinct words");
}

#[test]
fn test_degenerate_inputs() {
    for text in ["", "   ", "!!! ... ???"] {
        let graph = build(text, 10);
        assert_eq!(graph.vertex_count, 0, "text: {text:?}");
        assert_eq!(graph.edge_count, 0);
        assert!(graph.adjacency.is_empty());
        assert!(graph.word_frequencies.is_empty());
    }
}

#[test]
fn test_repeated_word_in_sentence_counts_once_per_sentence() {
    let graph = build("a a b. a b b.", 2);
    assert_eq!(weight(&graph, "a", "b"), Some(2.0));
}

#[test]
fn test_sentence_delimiters() {
    let graph = build("x y! x z? y z. x", 3);
    assert_eq!(weight(&graph, "x", "y"), Some(1.0));
    assert_eq!(weight(&graph, "x", "z"), Some(1.0));
    assert_eq!(weight(&graph, "y", "z"), Some(1.0));
}

fn text_strategy() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec!["ant", "bee", "cat", "dog", "eel", "fox", "gnu"]);
    prop::collection::vec(prop::collection::vec(word, 1..6), 0..8).prop_map(|sentences| {
        sentences
            .iter()
            .map(|s| s.join(" "))
            .collect::<Vec<_>>()
            .join(". ")
    })
}

proptest! {
    #[test]
    fn prop_vertex_set_is_consistent(text in text_strategy(), max_words in 0usize..10) {
        let graph = build(&text, max_words);
        prop_assert_eq!(graph.vertex_count, graph.word_frequencies.len());
        prop_assert_eq!(graph.vertex_count, graph.adjacency.len());
        for v in graph.word_frequencies.keys() {
            prop_assert!(graph.adjacency.contains_key(v));
        }
        let stored: usize = graph.adjacency.values().map(Vec::len).sum();
        prop_assert_eq!(graph.edge_count, stored);
    }

    #[test]
    fn prop_edges_are_symmetric(text in text_strategy(), max_words in 0usize..10) {
        let graph = build(&text, max_words);
        for (u, edges) in &graph.adjacency {
            for e in edges {
                prop_assert!(graph.contains(&e.to));
                prop_assert_ne!(u, &e.to);
                prop_assert_eq!(graph.weight(&e.to, u), Some(e.weight));
                prop_assert!(e.weight >= 1.0);
            }
        }
    }
}
