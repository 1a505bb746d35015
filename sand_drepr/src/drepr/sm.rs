use std::collections::BTreeMap;

pub const DREPR_NS: &str = "https://purl.org/drepr/1.0/";
/// predicate telling D-REPR to use the values of the target attribute as the URIs of the source
/// class node, instead of generating blank nodes
pub const DREPR_URI: &str = "drepr:uri";

const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
const GEO_NS: &str = "http://www.opengis.net/ont/geosparql#";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataType {
    pub uri: String,
    pub prefixes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedDataType {
    XsdDecimal,
    XsdAnyURI,
    XsdInt,
    XsdString,
    XsdDateTime,
    GeoWktLiteral,
    DreprUri,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub node_id: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataNode {
    pub node_id: String,
    pub attr_id: String,
    pub data_type: Option<DataType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LiteralNode {
    pub node_id: String,
    pub value: String,
    pub data_type: Option<DataType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    ClassNode(ClassNode),
    DataNode(DataNode),
    LiteralNode(LiteralNode),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Edge {
    pub edge_id: usize,
    pub source_id: String,
    pub target_id: String,
    pub label: String,
    pub is_subject: bool,
    pub is_required: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SemanticModel {
    pub nodes: BTreeMap<String, Node>,
    pub edges: Vec<Edge>,
    pub prefixes: BTreeMap<String, String>,
}

impl DataType {
    pub fn new(uri: &str, prefixes: &[(&str, &str)]) -> DataType {
        DataType {
            uri: uri.to_owned(),
            prefixes: prefixes.iter().map(|&(p, ns)| (p.to_owned(), ns.to_owned())).collect(),
        }
    }

    /// Compact form of the datatype URI using its own prefixes, e.g: `xsd:string`
    pub fn get_rel_uri(&self) -> String {
        for (prefix, ns) in &self.prefixes {
            if self.uri.starts_with(ns.as_str()) {
                return format!("{}:{}", prefix, &self.uri[ns.len()..]);
            }
        }
        self.uri.clone()
    }
}

impl PredefinedDataType {
    pub fn value(self) -> DataType {
        let (ns, prefix, name) = match self {
            PredefinedDataType::XsdDecimal => (XSD_NS, "xsd", "decimal"),
            PredefinedDataType::XsdAnyURI => (XSD_NS, "xsd", "anyURI"),
            PredefinedDataType::XsdInt => (XSD_NS, "xsd", "int"),
            PredefinedDataType::XsdString => (XSD_NS, "xsd", "string"),
            PredefinedDataType::XsdDateTime => (XSD_NS, "xsd", "dateTime"),
            PredefinedDataType::GeoWktLiteral => (GEO_NS, "geo", "wktLiteral"),
            PredefinedDataType::DreprUri => (DREPR_NS, "drepr", "uri"),
        };
        DataType::new(&format!("{}{}", ns, name), &[(prefix, ns)])
    }
}

impl Node {
    pub fn node_id(&self) -> &str {
        match self {
            Node::ClassNode(n) => &n.node_id,
            Node::DataNode(n) => &n.node_id,
            Node::LiteralNode(n) => &n.node_id,
        }
    }
}

impl Edge {
    pub fn new(edge_id: usize, source_id: String, target_id: String, label: String) -> Edge {
        Edge { edge_id, source_id, target_id, label, is_subject: false, is_required: false }
    }
}

impl SemanticModel {
    pub fn get_default_prefixes() -> BTreeMap<String, String> {
        let mut prefixes = BTreeMap::new();
        prefixes.insert("drepr".to_owned(), DREPR_NS.to_owned());
        prefixes.insert("rdf".to_owned(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#".to_owned());
        prefixes.insert("rdfs".to_owned(), "http://www.w3.org/2000/01/rdf-schema#".to_owned());
        prefixes.insert("xsd".to_owned(), XSD_NS.to_owned());
        prefixes.insert("owl".to_owned(), "http://www.w3.org/2002/07/owl#".to_owned());
        prefixes
    }

    pub fn get_node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn iter_outgoing_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item=&'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source_id == node_id)
    }

    pub fn iter_incoming_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item=&'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.target_id == node_id)
    }
}
