//! Command dispatch over the synset store and hypernym graph

use std::collections::HashSet;
use std::path::Path;

use synnet_core::{
    read_lines, BatchOutcome, LcaEngine, RecordParser, RelationGraph, Result, SynsetId,
    SynsetStore,
};

use crate::command::{Command, CommandParser, ParsedCommand};
use crate::response::{Payload, Response};

/// Owns the engine state and answers command lines
///
/// Recoverable failures become `:error` responses. An `Err` is returned only
/// when a file cannot be read or a caller contract was broken.
pub struct CommandHandler {
    commands: CommandParser,
    records: RecordParser,
    synsets: SynsetStore,
    graph: RelationGraph,
}

impl CommandHandler {
    pub fn new() -> Result<Self> {
        Ok(Self {
            commands: CommandParser::new()?,
            records: RecordParser::new()?,
            synsets: SynsetStore::new(),
            graph: RelationGraph::new(),
        })
    }

    pub fn synsets(&self) -> &SynsetStore {
        &self.synsets
    }

    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// Parse and run one command line
    pub fn handle(&mut self, line: &str) -> Result<Response> {
        match self.commands.parse(line) {
            ParsedCommand::Recognized(command) => self.execute(command),
            ParsedCommand::Malformed(kind) => Ok(Response::error(kind)),
            ParsedCommand::Unrecognized => Ok(Response::invalid()),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::debug!("Executing {:?}", command);

        let kind = command.kind();
        let payload = match command {
            Command::Load {
                synsets,
                hypernyms,
            } => self.load(&synsets, &hypernyms)?,
            Command::Lookup(id) => Payload::Words(self.synsets.lookup(id).to_vec()),
            Command::Find(word) => Payload::Ids(self.synsets.find(&word)),
            Command::FindMany(words) => Payload::IdsByWord(self.synsets.find_many(&words)),
            Command::Lca(first, second) => {
                Payload::Ancestors(LcaEngine::new(&self.graph).lca(first, second))
            }
        };

        Ok(Response::new(kind, payload))
    }

    /// Load a synset file and a hypernym file together
    ///
    /// Both files must validate and every hypernym endpoint must be declared
    /// in the synset file. Otherwise nothing is changed.
    fn load(&mut self, synsets_path: &Path, hypernyms_path: &Path) -> Result<Payload> {
        let synset_lines = read_lines(synsets_path)?;
        let hypernym_lines = read_lines(hypernyms_path)?;

        let synsets = match self.synsets.validate(&self.records, &synset_lines) {
            BatchOutcome::AllValid(synsets) => synsets,
            BatchOutcome::SomeInvalid(lines) => {
                tracing::warn!("{:?}: invalid synset lines {:?}", synsets_path, lines);
                return Ok(Payload::Error);
            }
        };

        let edges = match self.graph.validate(&self.records, &hypernym_lines) {
            BatchOutcome::AllValid(edges) => edges,
            BatchOutcome::SomeInvalid(lines) => {
                tracing::warn!("{:?}: invalid hypernym lines {:?}", hypernyms_path, lines);
                return Ok(Payload::Error);
            }
        };

        let declared: HashSet<SynsetId> = synsets.iter().map(|s| s.id).collect();
        if let Some(edge) = edges
            .iter()
            .find(|e| !declared.contains(&e.source) || !declared.contains(&e.destination))
        {
            tracing::warn!(
                "{:?}: hypernym {} names a synset missing from {:?}",
                hypernyms_path,
                edge,
                synsets_path
            );
            return Ok(Payload::Error);
        }

        let synset_count = self.synsets.commit(synsets)?;
        let edge_count = self.graph.commit(edges)?;
        tracing::info!(
            "Loaded {} synsets and {} hypernyms",
            synset_count,
            edge_count
        );

        Ok(Payload::Success(true))
    }
}
