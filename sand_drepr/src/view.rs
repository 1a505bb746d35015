//! JSON views of semantic models for the annotation interface.
use serde_json::Value;
use crate::models::ontology::{ClassStore, PropertyStore};
use crate::models::semantic_model::{LiteralNodeDataType, SemanticModel, SmNode};
use crate::namespace::NamespaceService;

/// Readable labels of ontology classes & properties, looked up by id
pub struct OntologyLabels<'a> {
    pub classes: &'a dyn ClassStore,
    pub props: &'a dyn PropertyStore,
}

impl<'a> OntologyLabels<'a> {
    /// Readable label of a class (`is_class`) or a property. An id can be both (e.g., the
    /// ontology of Wikidata), so the store matching the kind of the id is searched first.
    pub fn get_label(&self, id: &str, is_class: bool) -> Option<&'a str> {
        let classes = self.classes;
        let props = self.props;
        let class = classes.get_class(id).map(|c| c.readable_label.as_deref());
        let prop = props.get_property(id).map(|p| p.readable_label.as_deref());

        let (first, second) = if is_class { (class, prop) } else { (prop, class) };
        first.or(second).flatten()
    }
}

pub fn serialize_graph(sm: &SemanticModel, labels: &OntologyLabels, columns: &[String], namespace: &NamespaceService) -> Value {
    let nodes = sm.iter_nodes()
        .map(|node| match &node.data {
            SmNode::ClassNode(n) => json!({
                "id": node.id,
                "uri": n.abs_uri,
                "label": labels.get_label(&namespace.uri_to_id(&n.abs_uri), true).unwrap_or(&n.rel_uri),
                "approximation": n.approximation,
                "type": "class_node",
            }),
            SmNode::DataNode(n) => json!({
                "id": node.id,
                "label": columns.get(n.col_index).map(|c| c.as_str()).unwrap_or(&n.label),
                "type": "data_node",
                "column_index": n.col_index,
            }),
            SmNode::LiteralNode(n) => {
                let value = match n.datatype {
                    LiteralNodeDataType::Entity => namespace.uri_to_id(&n.value),
                    LiteralNodeDataType::String => n.value.clone(),
                };
                json!({
                    "id": node.id,
                    "value": value,
                    "label": n.label,
                    "type": "literal_node",
                    "is_in_context": n.is_in_context,
                    "datatype": n.datatype,
                })
            },
        })
        .collect::<Vec<_>>();

    let edges = sm.iter_edges()
        .map(|e| json!({
            "source": e.source_id,
            "target": e.target_id,
            "uri": e.data.abs_uri,
            "label": labels.get_label(&namespace.uri_to_id(&e.data.abs_uri), false).unwrap_or(&e.data.rel_uri),
            "approximation": e.data.approximation,
        }))
        .collect::<Vec<_>>();

    json!({ "nodes": nodes, "edges": edges })
}
