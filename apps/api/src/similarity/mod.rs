#![allow(dead_code)]

//! Snippet similarity store — an optional extension point, not wired into
//! the agent loop.
//!
//! Persists short text snippets and scores how close a new text sits to the
//! nearest stored ones. Vectors are token-frequency counts compared by
//! cosine distance; scores land in [0, 1] with 1.0 meaning near-identical.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Neighbours consulted per similarity query.
pub const DEFAULT_K: usize = 5;

/// One stored snippet. The id is the md5 hexdigest of the text, so adding
/// the same text twice is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snippet {
    pub id: String,
    pub text: String,
}

/// In-memory snippet collection with JSON-file persistence.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SnippetStore {
    snippets: Vec<Snippet>,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, raw)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Adds a snippet. Text already present is silently skipped.
    pub fn add(&mut self, text: &str) {
        let id = format!("{:x}", md5::compute(text.as_bytes()));
        if self.snippets.iter().any(|s| s.id == id) {
            return;
        }
        self.snippets.push(Snippet {
            id,
            text: text.to_string(),
        });
    }

    /// Similarity of `text` to its `k` nearest stored snippets: 0.0 for an
    /// empty store, otherwise `1 / (1 + mean cosine distance)` rounded to
    /// three decimals.
    pub fn similarity(&self, text: &str, k: usize) -> f64 {
        if self.snippets.is_empty() {
            return 0.0;
        }
        let query = token_frequencies(text);
        let mut distances: Vec<f64> = self
            .snippets
            .iter()
            .map(|s| cosine_distance(&query, &token_frequencies(&s.text)))
            .collect();
        distances.sort_by(|a, b| a.total_cmp(b));
        distances.truncate(k.clamp(1, self.snippets.len()));
        let mean = distances.iter().sum::<f64>() / distances.len() as f64;
        round3(1.0 / (1.0 + mean))
    }
}

fn token_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        *counts.entry(token.to_lowercase()).or_insert(0.0) += 1.0;
    }
    counts
}

/// 1 - cosine similarity; 1.0 when either vector is empty.
fn cosine_distance(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, va)| b.get(token).map(|vb| va * vb))
        .sum();
    let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    (1.0 - dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_scores_zero() {
        let store = SnippetStore::new();
        assert_eq!(store.similarity("anything", DEFAULT_K), 0.0);
    }

    #[test]
    fn test_identical_text_scores_one() {
        let mut store = SnippetStore::new();
        store.add("data analyst career tips");
        assert_eq!(store.similarity("data analyst career tips", DEFAULT_K), 1.0);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let mut store = SnippetStore::new();
        store.add("rust backend engineering");
        store.add("sourdough baking at home");
        for query in ["rust services", "completely unrelated words", ""] {
            let score = store.similarity(query, DEFAULT_K);
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_closer_text_scores_higher() {
        let mut store = SnippetStore::new();
        store.add("rust backend engineering with tokio");
        let close = store.similarity("rust backend engineering", 1);
        let far = store.similarity("watercolor painting techniques", 1);
        assert!(close > far);
    }

    #[test]
    fn test_duplicate_add_is_a_noop() {
        let mut store = SnippetStore::new();
        store.add("same text");
        store.add("same text");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_round_trips_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");

        let mut store = SnippetStore::new();
        store.add("first snippet");
        store.add("second snippet");
        store.save(&path).unwrap();

        let loaded = SnippetStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(
            loaded.similarity("first snippet", DEFAULT_K),
            store.similarity("first snippet", DEFAULT_K)
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(SnippetStore::load(Path::new("/nonexistent/snippets.json")).is_err());
    }
}
