// src/graph/builder.rs
//! Graph construction: tokenization, frequency ranking and edge derivation.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{Adjacency, Edge, WordGraph};
use crate::constants::{MAX_N, SENTENCE_DELIMITERS, WORD_PATTERN};

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("WORD_PATTERN is a valid regex"));

/// Builds the co-occurrence graph of the `max_words` most frequent words.
///
/// `text` is expected to be trimmed and lower-cased already.
#[must_use]
pub fn build(text: &str, max_words: usize) -> WordGraph {
    let limit = effective_max_words(max_words);
    let (frequencies, vocabulary) = select_vocabulary(text, limit);
    let adjacency = build_adjacency(text, &vocabulary);
    let graph = WordGraph::new(frequencies, adjacency);

    debug!(
        vertices = graph.vertex_count,
        edges = graph.edge_count,
        limit,
        "built word graph"
    );
    graph
}

/// Clamps a requested vertex limit into `1..=MAX_N`, falling back to `MAX_N`.
#[must_use]
pub fn effective_max_words(max_words: usize) -> usize {
    if max_words == 0 || max_words > MAX_N {
        debug!(requested = max_words, fallback = MAX_N, "max_words out of range");
        MAX_N
    } else {
        max_words
    }
}

/// Every token occurrence in `text`, in order.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Splits `text` on sentence terminators.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_DELIMITERS)
}

/// Distinct tokens ranked by descending count.
/// Equal counts keep the order in which the tokens first appear.
#[must_use]
pub fn rank_words(text: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokenize(text).enumerate() {
        counts.entry(token).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .map(|(word, (count, _))| (word.to_string(), count))
        .collect()
}

fn select_vocabulary(text: &str, limit: usize) -> (BTreeMap<String, usize>, Vec<String>) {
    let top: Vec<_> = rank_words(text).into_iter().take(limit).collect();
    let vocabulary = top.iter().map(|(word, _)| word.clone()).collect();
    (top.into_iter().collect(), vocabulary)
}

fn build_adjacency(text: &str, vocabulary: &[String]) -> Adjacency {
    let mut adjacency: Adjacency = vocabulary
        .iter()
        .map(|word| (word.clone(), Vec::new()))
        .collect();

    let sentence_sets: Vec<HashSet<&str>> =
        sentences(text).map(|s| tokenize(s).collect()).collect();

    for (i, u) in vocabulary.iter().enumerate() {
        for v in vocabulary.iter().skip(i + 1) {
            for tokens in &sentence_sets {
                if tokens.contains(u.as_str()) && tokens.contains(v.as_str()) {
                    record_co_occurrence(&mut adjacency, u, v);
                }
            }
        }
    }
    adjacency
}

// Both directions are stored independently and must be bumped together.
fn record_co_occurrence(adjacency: &mut Adjacency, u: &str, v: &str) {
    increment(adjacency, u, v);
    increment(adjacency, v, u);
}

fn increment(adjacency: &mut Adjacency, from: &str, to: &str) {
    let Some(edges) = adjacency.get_mut(from) else {
        return;
    };
    match edges.iter_mut().find(|e| e.to == to) {
        Some(edge) => edge.weight += 1.0,
        None => edges.push(Edge::new(to, 1.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_matches_word_pattern() {
        let tokens: Vec<_> = tokenize("state-of-the-art, snake_case & 42!").collect();
        assert_eq!(tokens, vec!["state-of-the-art", "snake_case", "42"]);
    }

    #[test]
    fn test_tokenize_ignores_uppercase_and_punctuation() {
        assert_eq!(tokenize("... !!! ???").count(), 0);
        assert_eq!(tokenize("ABC").count(), 0);
    }

    #[test]
    fn test_rank_ties_keep_first_seen_order() {
        let ranked = rank_words("b a c a b c d");
        let words: Vec<_> = ranked.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_effective_max_words() {
        let cases = vec![
            (0, MAX_N, "zero falls back"),
            (1, 1, "lower bound honored"),
            (MAX_N, MAX_N, "upper bound honored"),
            (MAX_N + 1, MAX_N, "above bound falls back"),
            (7, 7, "in range"),
        ];
        for (input, expected, desc) in cases {
            assert_eq!(effective_max_words(input), expected, "Failed: {desc}");
        }
    }

    #[test]
    fn test_increment_creates_then_bumps() {
        let mut adjacency: Adjacency = [("a".to_string(), Vec::new()), ("b".to_string(), Vec::new())]
            .into_iter()
            .collect();
        record_co_occurrence(&mut adjacency, "a", "b");
        record_co_occurrence(&mut adjacency, "a", "b");
        assert_eq!(adjacency["a"], vec![Edge::new("b", 2.0)]);
        assert_eq!(adjacency["b"], vec![Edge::new("a", 2.0)]);
    }
}
