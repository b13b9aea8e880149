//! Directed hypernym graph

use std::collections::{HashMap, VecDeque};

use crate::batch::{BatchOutcome, BatchValidator, LoadReport};
use crate::error::{Error, Result};
use crate::record::RecordParser;
use crate::synset::{Edge, VertexId};

/// Arena slot for a vertex
#[derive(Debug, Clone)]
struct Vertex {
    id: VertexId,
    /// Arena indices of destinations, sorted by destination id
    out: Vec<usize>,
}

/// Directed graph over integer vertex ids
///
/// Vertices live in an arena and refer to each other by index. Vertices and
/// edges are only ever added.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    vertices: Vec<Vertex>,
    index: HashMap<VertexId, usize>,
    edge_count: usize,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex if it is not present yet
    pub fn add_vertex(&mut self, id: VertexId) {
        self.slot_or_insert(id);
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&u), Some(_)) => self.find_out(u, to).is_ok(),
            _ => false,
        }
    }

    /// Add an edge between two existing vertices
    ///
    /// Returns whether the edge was new. Both endpoints must already be
    /// vertices.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool> {
        let u = *self.index.get(&from).ok_or(Error::VertexNotFound(from))?;
        let v = *self.index.get(&to).ok_or(Error::VertexNotFound(to))?;

        match self.find_out(u, to) {
            Ok(_) => Ok(false),
            Err(pos) => {
                self.vertices[u].out.insert(pos, v);
                self.edge_count += 1;
                Ok(true)
            }
        }
    }

    /// Record that `source` is a kind of `destination`
    ///
    /// Returns `false` for a negative endpoint or a self-loop; nothing is
    /// created in that case. A repeated edge is accepted and stays single.
    pub fn add_hypernym(&mut self, source: VertexId, destination: VertexId) -> bool {
        if !Edge::new(source, destination).is_well_formed() {
            return false;
        }

        self.add_vertex(source);
        self.add_vertex(destination);
        match self.add_edge(source, destination) {
            Ok(added) => {
                if !added {
                    tracing::trace!("Hypernym {} -> {} already present", source, destination);
                }
                true
            }
            // Both endpoints were created just above.
            Err(_) => false,
        }
    }

    /// Unweighted shortest distances along outgoing edges from `start`
    ///
    /// Unreachable vertices are absent. An unknown `start` gives an empty
    /// result.
    pub fn bfs(&self, start: VertexId) -> Distances {
        let mut distances = Distances::default();
        let Some(&origin) = self.index.get(&start) else {
            return distances;
        };

        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        distances.record(start, 0);
        queue.push_back((origin, 0));

        while let Some((current, depth)) = queue.pop_front() {
            for &next in &self.vertices[current].out {
                let id = self.vertices[next].id;
                if !distances.contains(id) {
                    distances.record(id, depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        tracing::trace!("BFS from {} reached {} vertices", start, distances.len());
        distances
    }

    /// Direct hypernyms of a vertex, ascending
    pub fn successors(&self, id: VertexId) -> Vec<VertexId> {
        self.index
            .get(&id)
            .map(|&u| {
                self.vertices[u]
                    .out
                    .iter()
                    .map(|&v| self.vertices[v].id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Validate hypernym lines without changing the graph
    pub fn validate<S: AsRef<str>>(&self, parser: &RecordParser, lines: &[S]) -> BatchOutcome<Edge> {
        BatchValidator::new(parser).validate_edges(lines)
    }

    /// Insert already-validated edges
    pub fn commit(&mut self, edges: Vec<Edge>) -> Result<usize> {
        let count = edges.len();
        for edge in edges {
            if !self.add_hypernym(edge.source, edge.destination) {
                return Err(Error::RejectedEdge {
                    from: edge.source,
                    to: edge.destination,
                });
            }
        }
        Ok(count)
    }

    /// Validate then insert every line, or nothing
    pub fn load<S: AsRef<str>>(&mut self, parser: &RecordParser, lines: &[S]) -> Result<LoadReport> {
        match self.validate(parser, lines) {
            BatchOutcome::AllValid(edges) => {
                let records = self.commit(edges)?;
                tracing::info!("Loaded {} hypernyms", records);
                Ok(LoadReport::Committed { records })
            }
            BatchOutcome::SomeInvalid(lines) => {
                tracing::warn!("Rejected hypernym batch, invalid lines: {:?}", lines);
                Ok(LoadReport::Rejected { lines })
            }
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn slot_or_insert(&mut self, id: VertexId) -> usize {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }
        let slot = self.vertices.len();
        self.vertices.push(Vertex { id, out: Vec::new() });
        self.index.insert(id, slot);
        slot
    }

    /// Position of `to` in the sorted out-list of slot `u`
    fn find_out(&self, u: usize, to: VertexId) -> std::result::Result<usize, usize> {
        let vertices = &self.vertices;
        vertices[u]
            .out
            .binary_search_by_key(&to, |&v| vertices[v].id)
    }
}

/// BFS distances keyed by vertex, remembering discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distances {
    order: Vec<VertexId>,
    depth: HashMap<VertexId, usize>,
}

impl Distances {
    fn record(&mut self, id: VertexId, depth: usize) {
        self.order.push(id);
        self.depth.insert(id, depth);
    }

    pub fn get(&self, id: VertexId) -> Option<usize> {
        self.depth.get(&id).copied()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.depth.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(vertex, distance)` pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.order.iter().map(move |id| (*id, self.depth[id]))
    }
}
