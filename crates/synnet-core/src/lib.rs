//! Synnet Core - Lexical relation engine
//!
//! This crate provides the synset store, the hypernym graph, the
//! lowest-common-ancestor search and the all-or-nothing file loading they
//! share.

pub mod batch;
pub mod error;
pub mod graph;
pub mod io;
pub mod record;
pub mod store;
pub mod synset;
pub mod traversal;

pub use batch::{BatchOutcome, BatchValidator, LoadReport};
pub use error::{Error, Result};
pub use graph::{Distances, RelationGraph};
pub use io::read_lines;
pub use record::RecordParser;
pub use store::SynsetStore;
pub use synset::{Edge, LineNumber, Synset, SynsetId, VertexId};
pub use traversal::{AncestorResult, LcaEngine};
