//! All-or-nothing validation of whole files
//!
//! Every line is checked independently. The outcome is either every record
//! in file order or every failing line number, never a mix.

use std::collections::HashSet;

use crate::record::RecordParser;
use crate::synset::{Edge, LineNumber, Synset, SynsetId};

/// Result of validating a batch of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome<T> {
    /// Every line was valid; records in file order
    AllValid(Vec<T>),
    /// At least one line was invalid; 1-indexed line numbers in file order
    SomeInvalid(Vec<LineNumber>),
}

impl<T> BatchOutcome<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::AllValid(_))
    }

    pub fn records(&self) -> Option<&[T]> {
        match self {
            Self::AllValid(records) => Some(records),
            Self::SomeInvalid(_) => None,
        }
    }

    pub fn invalid_lines(&self) -> Option<&[LineNumber]> {
        match self {
            Self::AllValid(_) => None,
            Self::SomeInvalid(lines) => Some(lines),
        }
    }
}

/// Outcome of a validate-then-commit load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// Every record was inserted
    Committed { records: usize },
    /// Nothing was inserted; 1-indexed failing line numbers
    Rejected { lines: Vec<LineNumber> },
}

impl LoadReport {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    pub fn rejected_lines(&self) -> Option<&[LineNumber]> {
        match self {
            Self::Committed { .. } => None,
            Self::Rejected { lines } => Some(lines),
        }
    }
}

/// Validates synset and hypernym files line by line
pub struct BatchValidator<'p> {
    parser: &'p RecordParser,
}

impl<'p> BatchValidator<'p> {
    pub fn new(parser: &'p RecordParser) -> Self {
        Self { parser }
    }

    /// Validate synset lines
    ///
    /// `taken` reports ids that already exist outside this batch; such lines
    /// are invalid too. Within the batch the first occurrence of an id wins.
    pub fn validate_synsets<S, F>(&self, lines: &[S], taken: F) -> BatchOutcome<Synset>
    where
        S: AsRef<str>,
        F: Fn(SynsetId) -> bool,
    {
        let mut seen: HashSet<SynsetId> = HashSet::new();
        let outcome = collect(lines, |line| {
            let synset = self.parser.parse_synset(line)?;
            if !synset.is_well_formed() || taken(synset.id) || !seen.insert(synset.id) {
                return None;
            }
            Some(synset)
        });

        log_outcome("synset", &outcome);
        outcome
    }

    /// Validate hypernym lines
    ///
    /// Only shape, sign and self-loops are checked here; whether endpoints
    /// name known synsets is up to the caller.
    pub fn validate_edges<S: AsRef<str>>(&self, lines: &[S]) -> BatchOutcome<Edge> {
        let outcome = collect(lines, |line| {
            self.parser
                .parse_edge(line)
                .filter(Edge::is_well_formed)
        });

        log_outcome("hypernym", &outcome);
        outcome
    }
}

fn collect<S, T, F>(lines: &[S], mut check: F) -> BatchOutcome<T>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Option<T>,
{
    let mut records = Vec::with_capacity(lines.len());
    let mut invalid = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match check(line.as_ref()) {
            Some(record) => records.push(record),
            None => invalid.push(index + 1),
        }
    }

    if invalid.is_empty() {
        BatchOutcome::AllValid(records)
    } else {
        BatchOutcome::SomeInvalid(invalid)
    }
}

fn log_outcome<T>(kind: &str, outcome: &BatchOutcome<T>) {
    match outcome {
        BatchOutcome::AllValid(records) => {
            tracing::debug!("Validated {} {} lines", records.len(), kind)
        }
        BatchOutcome::SomeInvalid(lines) => {
            tracing::debug!("{} {} lines failed validation: {:?}", lines.len(), kind, lines)
        }
    }
}
