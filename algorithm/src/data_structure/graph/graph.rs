use std::slice::Iter;
use super::node::Node;
use super::edge::Edge;
use super::graph_iter::IterEdge;

/// A directed multigraph whose node & edge ids are their positions in the graph.
///
/// Ids are handed out by `add_node` & `add_edge` and never change.
#[derive(Debug, Clone)]
pub struct Graph<ND, ED> {
    pub id: String,
    nodes: Vec<Node<ND>>,
    edges: Vec<Edge<ED>>,
}

impl<ND, ED> Graph<ND, ED> {
    pub fn new(id: String) -> Graph<ND, ED> {
        Graph {
            id,
            nodes: Vec::with_capacity(32),
            edges: Vec::with_capacity(31),
        }
    }

    #[inline]
    pub fn n_nodes(&self) -> usize { self.nodes.len() }

    #[inline]
    pub fn n_edges(&self) -> usize { self.edges.len() }

    /// Add new node to graph and return its id
    pub fn add_node(&mut self, mut node: Node<ND>) -> usize {
        node.id = self.nodes.len();
        node.incoming_edges.clear();
        node.outgoing_edges.clear();
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Add new edge to graph and return its id.
    ///
    /// Both endpoints must already be in the graph, use `has_node_with_id` to check beforehand.
    pub fn add_edge(&mut self, mut edge: Edge<ED>) -> usize {
        edge.id = self.edges.len();
        self.nodes[edge.source_id].outgoing_edges.push(edge.id);
        self.nodes[edge.target_id].incoming_edges.push(edge.id);
        self.edges.push(edge);
        self.edges.len() - 1
    }

    #[inline]
    pub fn get_node_by_id(&self, idx: usize) -> &Node<ND> { &self.nodes[idx] }

    #[inline]
    pub fn has_node_with_id(&self, id: usize) -> bool { id < self.nodes.len() }

    #[inline]
    pub fn iter_nodes(&self) -> Iter<Node<ND>> { self.nodes.iter() }

    #[inline]
    pub fn iter_edges(&self) -> Iter<Edge<ED>> { self.edges.iter() }

    #[inline]
    pub fn iter_incoming_edges(&self, nid: usize) -> IterEdge<ED> {
        IterEdge::new(&self.nodes[nid].incoming_edges, &self.edges)
    }

    #[inline]
    pub fn iter_outgoing_edges(&self, nid: usize) -> IterEdge<ED> {
        IterEdge::new(&self.nodes[nid].outgoing_edges, &self.edges)
    }
}
