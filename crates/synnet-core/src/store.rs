//! In-memory synset store

use std::collections::{BTreeMap, BTreeSet};

use crate::batch::{BatchOutcome, BatchValidator, LoadReport};
use crate::error::{Error, Result};
use crate::record::RecordParser;
use crate::synset::{Synset, SynsetId};

/// Id-keyed store of word groups
///
/// Synsets are only ever added; nothing is updated or removed.
#[derive(Debug, Clone, Default)]
pub struct SynsetStore {
    synsets: BTreeMap<SynsetId, Vec<String>>,
}

impl SynsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a synset
    ///
    /// Returns `false` for a negative id, an empty word group or an id that is
    /// already stored.
    pub fn add(&mut self, id: SynsetId, words: Vec<String>) -> bool {
        if id < 0 || words.is_empty() || self.synsets.contains_key(&id) {
            return false;
        }
        self.synsets.insert(id, words);
        true
    }

    /// Words of a synset, empty when the id is unknown
    pub fn lookup(&self, id: SynsetId) -> &[String] {
        self.synsets.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, id: SynsetId) -> bool {
        self.synsets.contains_key(&id)
    }

    /// Ids of every synset containing `word`
    pub fn find(&self, word: &str) -> BTreeSet<SynsetId> {
        self.synsets
            .iter()
            .filter(|(_, words)| words.iter().any(|w| w == word))
            .map(|(id, _)| *id)
            .collect()
    }

    /// `find` for each word
    pub fn find_many<S: AsRef<str>>(&self, words: &[S]) -> BTreeMap<String, BTreeSet<SynsetId>> {
        words
            .iter()
            .map(|word| (word.as_ref().to_string(), self.find(word.as_ref())))
            .collect()
    }

    /// Validate synset lines against this store without changing it
    pub fn validate<S: AsRef<str>>(&self, parser: &RecordParser, lines: &[S]) -> BatchOutcome<Synset> {
        BatchValidator::new(parser).validate_synsets(lines, |id| self.contains(id))
    }

    /// Insert already-validated synsets
    ///
    /// A rejected insert here means the records were not validated against
    /// this store, which is a caller defect.
    pub fn commit(&mut self, synsets: Vec<Synset>) -> Result<usize> {
        let count = synsets.len();
        for synset in synsets {
            let id = synset.id;
            if !self.add(id, synset.words) {
                return Err(Error::SynsetExists(id));
            }
        }
        Ok(count)
    }

    /// Validate then insert every line, or nothing
    pub fn load<S: AsRef<str>>(&mut self, parser: &RecordParser, lines: &[S]) -> Result<LoadReport> {
        match self.validate(parser, lines) {
            BatchOutcome::AllValid(synsets) => {
                let records = self.commit(synsets)?;
                tracing::info!("Loaded {} synsets", records);
                Ok(LoadReport::Committed { records })
            }
            BatchOutcome::SomeInvalid(lines) => {
                tracing::warn!("Rejected synset batch, invalid lines: {:?}", lines);
                Ok(LoadReport::Rejected { lines })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Synsets in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (SynsetId, &[String])> {
        self.synsets.iter().map(|(id, words)| (*id, words.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn sample_store() -> SynsetStore {
        let mut store = SynsetStore::new();
        assert!(store.add(1, words(&["dog"])));
        assert!(store.add(2, words(&["canine"])));
        assert!(store.add(3, words(&["animal"])));
        assert!(store.add(4, words(&["cat"])));
        store
    }

    #[test]
    fn test_add_and_lookup() {
        let store = sample_store();
        assert_eq!(store.lookup(1), words(&["dog"]).as_slice());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut store = sample_store();
        assert!(!store.add(-1, words(&["ghost"])));
        assert!(!store.add(10, vec![]));
        assert!(!store.add(1, words(&["hound"])));
        assert_eq!(store.lookup(1), words(&["dog"]).as_slice());
        assert!(store.lookup(10).is_empty());
    }

    #[test]
    fn test_lookup_missing_is_empty() {
        let store = SynsetStore::new();
        assert!(store.lookup(99).is_empty());
    }

    #[test]
    fn test_find() {
        let mut store = sample_store();
        store.add(5, words(&["dog", "frank", "hotdog"]));

        assert_eq!(store.find("canine"), BTreeSet::from([2]));
        assert_eq!(store.find("dog"), BTreeSet::from([1, 5]));
        assert!(store.find("unicorn").is_empty());
    }

    #[test]
    fn test_find_many() {
        let store = sample_store();
        let found = store.find_many(&["dog", "cat", "unicorn"]);

        assert_eq!(found["dog"], BTreeSet::from([1]));
        assert_eq!(found["cat"], BTreeSet::from([4]));
        assert!(found["unicorn"].is_empty());
    }

    #[test]
    fn test_load_commits_everything() {
        let parser = RecordParser::new().unwrap();
        let mut store = SynsetStore::new();
        let lines = ["id: 2 synset: canine", "id: 1 synset: dog,hound"];

        let report = store.load(&parser, &lines).unwrap();
        assert_eq!(report, LoadReport::Committed { records: 2 });
        assert_eq!(store.lookup(1), words(&["dog", "hound"]).as_slice());
        assert_eq!(store.lookup(2), words(&["canine"]).as_slice());
    }

    #[test]
    fn test_load_order_does_not_matter() {
        let parser = RecordParser::new().unwrap();
        let mut forward = SynsetStore::new();
        let mut backward = SynsetStore::new();

        forward
            .load(&parser, &["id: 1 synset: dog", "id: 2 synset: cat"])
            .unwrap();
        backward
            .load(&parser, &["id: 2 synset: cat", "id: 1 synset: dog"])
            .unwrap();

        assert!(forward.iter().eq(backward.iter()));
    }

    #[test]
    fn test_load_rolls_back_on_invalid_line() {
        let parser = RecordParser::new().unwrap();
        let mut store = sample_store();
        let lines = ["id: 7 synset: bird", "id: 7 synset: fowl", "nonsense"];

        let report = store.load(&parser, &lines).unwrap();
        assert_eq!(report.rejected_lines(), Some(&[2, 3][..]));
        assert!(store.lookup(7).is_empty());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_load_rejects_already_stored_id() {
        let parser = RecordParser::new().unwrap();
        let mut store = sample_store();

        let report = store
            .load(&parser, &["id: 8 synset: fish", "id: 3 synset: beast"])
            .unwrap();
        assert_eq!(report, LoadReport::Rejected { lines: vec![2] });
        assert!(store.lookup(8).is_empty());
        assert_eq!(store.lookup(3), words(&["animal"]).as_slice());
    }

    #[test]
    fn test_commit_duplicate_is_contract_violation() {
        let mut store = sample_store();
        let err = store
            .commit(vec![Synset::new(1, words(&["hound"]))])
            .unwrap_err();
        assert!(err.is_contract_violation());
    }
}
