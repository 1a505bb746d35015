use std::slice::Iter;
use super::edge::Edge;

/// Edges of a node, in the order they were added to the graph
pub struct IterEdge<'a, ED: 'a> {
    edge_ids: Iter<'a, usize>,
    edges: &'a [Edge<ED>],
}

impl<'a, ED: 'a> IterEdge<'a, ED> {
    pub(super) fn new(edge_ids: &'a [usize], edges: &'a [Edge<ED>]) -> IterEdge<'a, ED> {
        IterEdge { edge_ids: edge_ids.iter(), edges }
    }
}

impl<'a, ED: 'a> Iterator for IterEdge<'a, ED> {
    type Item = &'a Edge<ED>;

    fn next(&mut self) -> Option<Self::Item> {
        self.edge_ids.next().map(|&eid| &self.edges[eid])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edge_ids.size_hint()
    }
}
