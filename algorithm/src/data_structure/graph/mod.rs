mod node;
mod edge;
mod graph;
mod graph_iter;

pub use self::graph::Graph;
pub use self::node::Node;
pub use self::edge::Edge;
pub use self::graph_iter::*;
