use std::slice::Iter;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde_json::Value;
use algorithm::prelude::*;
use crate::errors::*;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralNodeDataType {
    #[serde(rename = "entity-id")]
    Entity,
    #[serde(rename = "string")]
    String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub abs_uri: String,
    pub rel_uri: String,
    #[serde(default)]
    pub approximation: bool,
    #[serde(default)]
    pub readable_label: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataNode {
    pub col_index: usize,
    #[serde(default)]
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LiteralNode {
    pub value: String,
    #[serde(default)]
    pub label: String,
    pub datatype: LiteralNodeDataType,
    /// whether the value also appears in the context of the table (e.g., its caption)
    #[serde(default)]
    pub is_in_context: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SmNode {
    ClassNode(ClassNode),
    DataNode(DataNode),
    LiteralNode(LiteralNode),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SmEdge {
    pub abs_uri: String,
    pub rel_uri: String,
    #[serde(default)]
    pub approximation: bool,
    #[serde(default)]
    pub readable_label: Option<String>,
}

impl SmNode {
    pub fn class_node(abs_uri: &str, rel_uri: &str) -> SmNode {
        SmNode::ClassNode(ClassNode {
            abs_uri: abs_uri.to_owned(),
            rel_uri: rel_uri.to_owned(),
            approximation: false,
            readable_label: None,
        })
    }

    pub fn data_node(col_index: usize, label: &str) -> SmNode {
        SmNode::DataNode(DataNode { col_index, label: label.to_owned() })
    }

    pub fn literal_node(value: &str, datatype: LiteralNodeDataType) -> SmNode {
        SmNode::LiteralNode(LiteralNode {
            value: value.to_owned(),
            label: value.to_owned(),
            datatype,
            is_in_context: false,
        })
    }

    #[inline]
    pub fn is_class_node(&self) -> bool {
        match self {
            SmNode::ClassNode(_) => true,
            _ => false,
        }
    }

    #[inline]
    pub fn as_class_node(&self) -> Option<&ClassNode> {
        match self {
            SmNode::ClassNode(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_data_node(&self) -> Option<&DataNode> {
        match self {
            SmNode::DataNode(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_literal_node(&self) -> Option<&LiteralNode> {
        match self {
            SmNode::LiteralNode(n) => Some(n),
            _ => None,
        }
    }
}

impl SmEdge {
    pub fn new(abs_uri: &str, rel_uri: &str) -> SmEdge {
        SmEdge {
            abs_uri: abs_uri.to_owned(),
            rel_uri: rel_uri.to_owned(),
            approximation: false,
            readable_label: None,
        }
    }
}

/// A semantic model of a table: class nodes, data nodes (columns) & literal nodes connected by
/// ontology properties.
#[derive(Debug, Clone)]
pub struct SemanticModel {
    graph: Graph<SmNode, SmEdge>,
}

impl SemanticModel {
    pub fn new(id: String) -> SemanticModel {
        SemanticModel { graph: Graph::new(id) }
    }

    #[inline]
    pub fn id(&self) -> &str { &self.graph.id }

    #[inline]
    pub fn n_nodes(&self) -> usize { self.graph.n_nodes() }

    #[inline]
    pub fn n_edges(&self) -> usize { self.graph.n_edges() }

    /// Add a node and return its id
    pub fn add_node(&mut self, node: SmNode) -> usize {
        self.graph.add_node(Node::new(node))
    }

    /// Add an edge between two existing nodes and return its id
    pub fn add_edge(&mut self, source: usize, target: usize, edge: SmEdge) -> Result<usize> {
        if !self.graph.has_node_with_id(source) || !self.graph.has_node_with_id(target) {
            bail!(ErrorKind::InvalidEdge(source, target));
        }
        Ok(self.graph.add_edge(Edge::new(source, target, edge)))
    }

    #[inline]
    pub fn has_node(&self, id: usize) -> bool { self.graph.has_node_with_id(id) }

    pub fn get_node(&self, id: usize) -> Option<&SmNode> {
        if self.graph.has_node_with_id(id) {
            Some(&self.graph.get_node_by_id(id).data)
        } else {
            None
        }
    }

    #[inline]
    pub fn iter_nodes(&self) -> Iter<Node<SmNode>> { self.graph.iter_nodes() }

    #[inline]
    pub fn iter_edges(&self) -> Iter<Edge<SmEdge>> { self.graph.iter_edges() }

    /// Iterate over incoming edges of a node, the node must exist
    #[inline]
    pub fn in_edges(&self, id: usize) -> IterEdge<SmEdge> { self.graph.iter_incoming_edges(id) }

    /// Iterate over outgoing edges of a node, the node must exist
    #[inline]
    pub fn out_edges(&self, id: usize) -> IterEdge<SmEdge> { self.graph.iter_outgoing_edges(id) }

    #[inline]
    pub fn in_degree(&self, id: usize) -> usize { self.graph.get_node_by_id(id).n_incoming_edges() }

    #[inline]
    pub fn out_degree(&self, id: usize) -> usize { self.graph.get_node_by_id(id).n_outgoing_edges() }

    pub fn iter_data_nodes<'a>(&'a self) -> impl Iterator<Item=(usize, &'a DataNode)> + 'a {
        self.graph.iter_nodes().filter_map(|n| n.data.as_data_node().map(|d| (n.id, d)))
    }

    pub fn iter_literal_nodes<'a>(&'a self) -> impl Iterator<Item=(usize, &'a LiteralNode)> + 'a {
        self.graph.iter_nodes().filter_map(|n| n.data.as_literal_node().map(|d| (n.id, d)))
    }

    pub fn to_dict(&self) -> Result<Value> {
        let mut nodes = Vec::with_capacity(self.n_nodes());
        for node in self.iter_nodes() {
            let mut record = serde_json::to_value(&node.data)?;
            record["id"] = json!(node.id);
            nodes.push(record);
        }

        let edges = self.iter_edges()
            .map(|e| json!({
                "source": e.source_id,
                "target": e.target_id,
                "abs_uri": e.data.abs_uri,
                "rel_uri": e.data.rel_uri,
                "approximation": e.data.approximation,
                "readable_label": e.data.readable_label,
            }))
            .collect::<Vec<_>>();

        Ok(json!({
            "id": self.id(),
            "nodes": nodes,
            "edges": edges,
        }))
    }

    /// Load a semantic model from its JSON form. Node ids must be the positions of the nodes.
    pub fn from_dict(obj: &Value) -> Result<SemanticModel> {
        let records = obj["nodes"].as_array()
            .ok_or_else(|| ErrorKind::InvalidModel("missing `nodes`".to_owned()))?;
        let mut sm = SemanticModel::new(obj["id"].as_str().unwrap_or("").to_owned());

        for record in records {
            let node: SmNode = serde_json::from_value(record.clone())?;
            let nid = sm.add_node(node);
            match record["id"].as_u64() {
                Some(id) if id as usize == nid => {},
                _ => bail!(ErrorKind::InvalidModel(format!("node at position {} has id {}", nid, record["id"]))),
            }
        }

        if let Some(records) = obj["edges"].as_array() {
            for record in records {
                let er: EdgeRecord = serde_json::from_value(record.clone())?;
                sm.add_edge(er.source, er.target, SmEdge {
                    abs_uri: er.abs_uri,
                    rel_uri: er.rel_uri,
                    approximation: er.approximation,
                    readable_label: er.readable_label,
                })?;
            }
        }

        Ok(sm)
    }
}

#[derive(Deserialize)]
struct EdgeRecord {
    source: usize,
    target: usize,
    abs_uri: String,
    rel_uri: String,
    #[serde(default)]
    approximation: bool,
    #[serde(default)]
    readable_label: Option<String>,
}

impl Serialize for SemanticModel {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
        where S: Serializer {

        let value = self.to_dict().map_err(|e| S::Error::custom(e.to_string()))?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SemanticModel {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<SemanticModel, D::Error>
        where D: Deserializer<'de> {

        let value = Value::deserialize(deserializer)?;
        SemanticModel::from_dict(&value).map_err(|e| D::Error::custom(e.to_string()))
    }
}
