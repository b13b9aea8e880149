//! Synset and hypernym edge types

use serde::Serialize;

/// Identifier of a synset
///
/// Signed so that negative ids can reach the insert operations and be
/// rejected there.
pub type SynsetId = i64;

/// Identifier of a vertex in the relation graph
pub type VertexId = i64;

/// 1-indexed line number within a loaded file
pub type LineNumber = usize;

/// A group of words sharing a sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synset {
    pub id: SynsetId,
    pub words: Vec<String>,
}

impl Synset {
    pub fn new(id: SynsetId, words: Vec<String>) -> Self {
        Self { id, words }
    }

    /// Non-negative id and at least one word
    pub fn is_well_formed(&self) -> bool {
        self.id >= 0 && !self.words.is_empty()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// A hypernym edge, pointing from a specific concept to a more general one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Non-negative endpoints and no self-loop
    pub fn is_well_formed(&self) -> bool {
        self.source >= 0 && self.destination >= 0 && self.source != self.destination
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synset_well_formed() {
        assert!(Synset::new(0, vec!["entity".to_string()]).is_well_formed());
        assert!(!Synset::new(-1, vec!["entity".to_string()]).is_well_formed());
        assert!(!Synset::new(3, vec![]).is_well_formed());
    }

    #[test]
    fn test_edge_well_formed() {
        assert!(Edge::new(1, 2).is_well_formed());
        assert!(!Edge::new(2, 2).is_well_formed());
        assert!(!Edge::new(-1, 2).is_well_formed());
        assert!(!Edge::new(1, -2).is_well_formed());
    }

    #[test]
    fn test_contains_word_is_exact() {
        let synset = Synset::new(7, vec!["dog".to_string(), "domestic_dog".to_string()]);
        assert!(synset.contains_word("dog"));
        assert!(!synset.contains_word("do"));
        assert!(!synset.contains_word("Dog"));
    }
}
