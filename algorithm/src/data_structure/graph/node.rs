#[derive(Debug, Clone, PartialEq)]
pub struct Node<ND> {
    pub id: usize,
    pub incoming_edges: Vec<usize>,
    pub outgoing_edges: Vec<usize>,
    pub data: ND
}

impl<ND> Node<ND> {
    pub fn new(data: ND) -> Node<ND> {
        Node {
            // assigned by the graph when the node is added
            id: usize::max_value(),
            incoming_edges: Vec::new(),
            outgoing_edges: Vec::new(),
            data
        }
    }

    #[inline]
    pub fn n_incoming_edges(&self) -> usize { self.incoming_edges.len() }

    #[inline]
    pub fn n_outgoing_edges(&self) -> usize { self.outgoing_edges.len() }
}
