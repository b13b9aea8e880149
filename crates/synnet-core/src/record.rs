//! Line-level record parsing for synset and hypernym files
//!
//! A synset line looks like `id: 12 synset: dog,domestic_dog` and a hypernym
//! line like `from: 12 to: 40`. Anything else is not a record.

use regex::Regex;

use crate::error::Result;
use crate::synset::{Edge, Synset};

/// Characters allowed inside a single word of a synset
pub const WORD_PATTERN: &str = r"[A-Za-z0-9_.'/-]+";

/// Compiled record patterns
///
/// Built once and shared by reference with every validator and store that
/// needs to read files.
#[derive(Debug, Clone)]
pub struct RecordParser {
    synset: Regex,
    edge: Regex,
}

impl RecordParser {
    pub fn new() -> Result<Self> {
        let synset = Regex::new(&format!(
            r"^id: (\d+) synset: ({word}(?:,{word})*)$",
            word = WORD_PATTERN
        ))?;
        let edge = Regex::new(r"^from: (\d+) to: (\d+)$")?;
        Ok(Self { synset, edge })
    }

    /// Parse a synset line, `None` if it does not match
    pub fn parse_synset(&self, line: &str) -> Option<Synset> {
        let caps = self.synset.captures(strip_terminator(line))?;
        let id = caps[1].parse().ok()?;
        let words = caps[2].split(',').map(str::to_string).collect();
        Some(Synset::new(id, words))
    }

    /// Parse a hypernym line, `None` if it does not match
    pub fn parse_edge(&self, line: &str) -> Option<Edge> {
        let caps = self.edge.captures(strip_terminator(line))?;
        let source = caps[1].parse().ok()?;
        let destination = caps[2].parse().ok()?;
        Some(Edge::new(source, destination))
    }
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
