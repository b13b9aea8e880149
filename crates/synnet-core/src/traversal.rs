//! Lowest common ancestor search over the hypernym graph

use serde::Serialize;

use crate::graph::RelationGraph;
use crate::synset::VertexId;

/// Result of an ancestor query with the numbers behind it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AncestorResult {
    /// Lowest common ancestors, in discovery order from the first vertex
    pub ancestors: Vec<VertexId>,

    /// Summed distance of each ancestor (None when there is none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,

    /// Vertices reachable from both query vertices
    pub candidates: usize,
}

/// Lowest common ancestor engine
pub struct LcaEngine<'g> {
    graph: &'g RelationGraph,
}

impl<'g> LcaEngine<'g> {
    pub fn new(graph: &'g RelationGraph) -> Self {
        Self { graph }
    }

    /// Lowest common ancestors of two vertices
    ///
    /// `None` when either vertex is missing from the graph. An empty list
    /// means both exist but share no ancestor. Ties are all returned.
    pub fn lca(&self, first: VertexId, second: VertexId) -> Option<Vec<VertexId>> {
        self.execute(first, second).map(|result| result.ancestors)
    }

    /// Same as [`LcaEngine::lca`] but keeps the distance and candidate count
    pub fn execute(&self, first: VertexId, second: VertexId) -> Option<AncestorResult> {
        if !self.graph.has_vertex(first) || !self.graph.has_vertex(second) {
            tracing::debug!("LCA {} / {}: missing vertex", first, second);
            return None;
        }

        if first == second {
            return Some(AncestorResult {
                ancestors: vec![first],
                distance: Some(0),
                candidates: 1,
            });
        }

        let from_first = self.graph.bfs(first);
        let from_second = self.graph.bfs(second);

        let mut result = AncestorResult::default();
        for (vertex, d1) in from_first.iter() {
            let Some(d2) = from_second.get(vertex) else {
                continue;
            };
            result.candidates += 1;

            let total = d1 + d2;
            match result.distance {
                Some(best) if total > best => {}
                Some(best) if total == best => result.ancestors.push(vertex),
                _ => {
                    result.distance = Some(total);
                    result.ancestors.clear();
                    result.ancestors.push(vertex);
                }
            }
        }

        tracing::debug!(
            "LCA {} / {}: {} candidates, best {:?} -> {:?}",
            first,
            second,
            result.candidates,
            result.distance,
            result.ancestors
        );

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dog(1) -> canine(2) -> animal(3) <- cat(4)
    fn animals() -> RelationGraph {
        let mut graph = RelationGraph::new();
        graph.add_hypernym(1, 2);
        graph.add_hypernym(2, 3);
        graph.add_hypernym(4, 3);
        graph
    }

    #[test]
    fn test_lca_shared_ancestor() {
        let graph = animals();
        let engine = LcaEngine::new(&graph);
        assert_eq!(engine.lca(1, 4), Some(vec![3]));
    }

    #[test]
    fn test_lca_ancestor_is_query_vertex() {
        let graph = animals();
        let engine = LcaEngine::new(&graph);
        assert_eq!(engine.lca(1, 2), Some(vec![2]));
        assert_eq!(engine.lca(2, 1), Some(vec![2]));
    }

    #[test]
    fn test_lca_missing_vertex_is_none() {
        let graph = animals();
        let engine = LcaEngine::new(&graph);
        assert_eq!(engine.lca(1, 5), None);
        assert_eq!(engine.lca(5, 1), None);
        assert_eq!(engine.lca(5, 5), None);
    }

    #[test]
    fn test_lca_same_vertex() {
        let graph = animals();
        let engine = LcaEngine::new(&graph);
        for v in [1, 2, 3, 4] {
            assert_eq!(engine.lca(v, v), Some(vec![v]));
        }
    }

    #[test]
    fn test_lca_no_common_ancestor_is_empty() {
        let mut graph = animals();
        graph.add_hypernym(10, 11);

        let engine = LcaEngine::new(&graph);
        let result = engine.execute(1, 10).unwrap();
        assert!(result.ancestors.is_empty());
        assert_eq!(result.distance, None);
        assert_eq!(result.candidates, 0);
    }

    #[test]
    fn test_lca_returns_all_ties_in_discovery_order() {
        // 1 -> 20, 1 -> 10; 2 -> 10, 2 -> 20: both 10 and 20 are at distance 2
        let mut graph = RelationGraph::new();
        graph.add_hypernym(1, 20);
        graph.add_hypernym(1, 10);
        graph.add_hypernym(2, 10);
        graph.add_hypernym(2, 20);
        graph.add_hypernym(10, 30);
        graph.add_hypernym(20, 30);

        let engine = LcaEngine::new(&graph);
        let result = engine.execute(1, 2).unwrap();
        assert_eq!(result.ancestors, vec![10, 20]);
        assert_eq!(result.distance, Some(2));
        assert_eq!(result.candidates, 3);
    }

    #[test]
    fn test_lca_prefers_smallest_sum_over_first_found() {
        // 1 -> 5 -> 6, 2 -> 6 and 1 -> 7 -> 8 -> 9, 2 -> 9
        // 6 totals 2 + 1 = 3, 9 totals 3 + 1 = 4
        let mut graph = RelationGraph::new();
        graph.add_hypernym(1, 5);
        graph.add_hypernym(5, 6);
        graph.add_hypernym(2, 6);
        graph.add_hypernym(1, 7);
        graph.add_hypernym(7, 8);
        graph.add_hypernym(8, 9);
        graph.add_hypernym(2, 9);

        let engine = LcaEngine::new(&graph);
        assert_eq!(engine.lca(1, 2), Some(vec![6]));
    }

    #[test]
    fn test_lca_is_symmetric_as_set() {
        let mut graph = RelationGraph::new();
        graph.add_hypernym(1, 20);
        graph.add_hypernym(1, 10);
        graph.add_hypernym(2, 10);
        graph.add_hypernym(2, 20);

        let engine = LcaEngine::new(&graph);
        let mut forward = engine.lca(1, 2).unwrap();
        let mut backward = engine.lca(2, 1).unwrap();
        forward.sort_unstable();
        backward.sort_unstable();
        assert_eq!(forward, backward);
    }
}
