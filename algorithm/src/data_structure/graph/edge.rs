#[derive(Debug, Clone, PartialEq)]
pub struct Edge<ED> {
    pub id: usize,
    pub source_id: usize,
    pub target_id: usize,
    pub data: ED
}

impl<ED> Edge<ED> {
    pub fn new(source_id: usize, target_id: usize, data: ED) -> Edge<ED> {
        Edge {
            // assigned by the graph when the edge is added
            id: usize::max_value(),
            source_id,
            target_id,
            data
        }
    }
}
