//! Convert the semantic model of a table into the semantic model of D-REPR.
use std::collections::{BTreeMap, BTreeSet, HashSet};
use crate::drepr::sm::{self as dsm, DataType, PredefinedDataType, DREPR_URI};
use crate::errors::*;
use crate::models::ontology::{OntPropertyDataType, PropertyStore};
use crate::models::semantic_model::{DataNode, LiteralNodeDataType, SemanticModel, SmNode};
use crate::namespace::NamespaceService;
use super::naming::AttrNamer;

/// Mapping from the predefined datatypes of ontology properties to D-REPR datatypes
pub fn to_drepr_datatype(datatype: OntPropertyDataType) -> Option<DataType> {
    match datatype {
        OntPropertyDataType::GlobeCoordinate => Some(PredefinedDataType::GeoWktLiteral.value()),
        OntPropertyDataType::Url => Some(PredefinedDataType::XsdAnyURI.value()),
        OntPropertyDataType::Entity => Some(PredefinedDataType::DreprUri.value()),
        OntPropertyDataType::String => Some(PredefinedDataType::XsdString.value()),
        OntPropertyDataType::IntegerNumber => Some(PredefinedDataType::XsdInt.value()),
        OntPropertyDataType::DecimalNumber => Some(PredefinedDataType::XsdDecimal.value()),
        OntPropertyDataType::Datetime => Some(PredefinedDataType::XsdDateTime.value()),
        OntPropertyDataType::MonolingualText
        | OntPropertyDataType::Quantity
        | OntPropertyDataType::Unknown => None,
    }
}

/// Datatype of a data node, decided by the properties of its incoming edges. When the properties
/// do not agree with each other (or there is no incoming edge), the datatype is unknown.
pub fn get_data_node_datatype(
    sm: &SemanticModel,
    node_id: usize,
    namespace: &NamespaceService,
    ontprops: &dyn PropertyStore,
) -> Result<Option<OntPropertyDataType>> {
    let mut datatypes = HashSet::new();
    for inedge in sm.in_edges(node_id) {
        let prop = ontprops.get_property(&namespace.uri_to_id(&inedge.data.abs_uri))
            .ok_or_else(|| ErrorKind::UnknownProperty(inedge.data.abs_uri.clone()))?;
        datatypes.insert(prop.datatype);
    }

    if datatypes.len() == 1 {
        Ok(datatypes.into_iter().next())
    } else {
        if datatypes.len() > 1 {
            debug!("Data node {} has conflicting datatypes: {:?}", node_id, datatypes);
        }
        Ok(None)
    }
}

/// Data nodes whose columns contain entities: at least one incoming edge is an identifier
/// property (e.g., rdfs:label)
pub fn get_entity_data_nodes<'a>(sm: &'a SemanticModel, ident_props: &HashSet<String>) -> Vec<(usize, &'a DataNode)> {
    sm.iter_data_nodes()
        .filter(|&(id, _)| sm.in_edges(id).any(|e| ident_props.contains(&e.data.abs_uri)))
        .collect()
}

/// Convert a semantic model into a D-REPR semantic model.
///
/// # Arguments
///
/// * `sm` - the semantic model we want to convert
/// * `namespace` - to get the ids of the ontology properties
/// * `ontprops` - ontology properties, keyed by id
/// * `ident_props` - properties telling a data node contains entities (e.g., rdfs:label)
/// * `namer` - ids of the attributes of columns. For each entity column, an extra attribute
///   contains the entity URIs so that D-REPR uses them instead of generating blank nodes
pub fn get_drepr_sm(
    sm: &SemanticModel,
    namespace: &NamespaceService,
    ontprops: &dyn PropertyStore,
    ident_props: &HashSet<String>,
    namer: &mut AttrNamer,
) -> Result<dsm::SemanticModel> {
    for (_, dnode) in sm.iter_data_nodes() {
        if dnode.col_index >= namer.n_columns() {
            bail!(ErrorKind::InvalidColumnIndex(dnode.col_index, namer.n_columns()));
        }
    }

    let mut nodes = BTreeMap::new();
    let mut edges = Vec::with_capacity(sm.n_edges());

    for node in sm.iter_nodes() {
        let node_id = node.id.to_string();
        let dnode = match &node.data {
            SmNode::ClassNode(n) => dsm::Node::ClassNode(dsm::ClassNode {
                node_id: node_id.clone(),
                label: n.rel_uri.clone(),
            }),
            SmNode::DataNode(n) => {
                let datatype = get_data_node_datatype(sm, node.id, namespace, ontprops)?;
                dsm::Node::DataNode(dsm::DataNode {
                    node_id: node_id.clone(),
                    attr_id: namer.attr_id(n.col_index),
                    data_type: datatype.and_then(to_drepr_datatype),
                })
            },
            SmNode::LiteralNode(n) => {
                let datatype = match n.datatype {
                    LiteralNodeDataType::Entity => PredefinedDataType::DreprUri,
                    LiteralNodeDataType::String => PredefinedDataType::XsdString,
                };
                dsm::Node::LiteralNode(dsm::LiteralNode {
                    node_id: node_id.clone(),
                    value: n.value.clone(),
                    data_type: Some(datatype.value()),
                })
            },
        };
        nodes.insert(node_id, dnode);
    }

    // nodes without any edge mean nothing to D-REPR
    let used_ids = sm.iter_edges()
        .flat_map(|e| vec![e.source_id.to_string(), e.target_id.to_string()])
        .collect::<BTreeSet<_>>();
    nodes.retain(|node_id, _| used_ids.contains(node_id));

    for edge in sm.iter_edges() {
        edges.push(dsm::Edge::new(
            edges.len(),
            edge.source_id.to_string(),
            edge.target_id.to_string(),
            edge.data.rel_uri.clone(),
        ));
    }

    for (nid, node) in get_entity_data_nodes(sm, ident_props) {
        let inedges = sm.in_edges(nid)
            .filter(|e| ident_props.contains(&e.data.abs_uri))
            .collect::<Vec<_>>();
        if inedges.len() != 1 {
            bail!(ErrorKind::AmbiguousEntityColumn(nid, inedges.len()));
        }

        let new_node_id = format!("{}:ents", nid);
        nodes.insert(new_node_id.clone(), dsm::Node::DataNode(dsm::DataNode {
            node_id: new_node_id.clone(),
            attr_id: namer.ent_attr_id(node.col_index),
            data_type: Some(PredefinedDataType::DreprUri.value()),
        }));
        edges.push(dsm::Edge::new(
            edges.len(),
            inedges[0].source_id.to_string(),
            new_node_id,
            DREPR_URI.to_owned(),
        ));
    }

    let mut prefixes = namespace.prefixes().clone();
    prefixes.extend(dsm::SemanticModel::get_default_prefixes());

    Ok(dsm::SemanticModel { nodes, edges, prefixes })
}
