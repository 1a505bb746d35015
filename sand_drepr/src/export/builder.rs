//! Build the D-REPR description of a table from its semantic model.
use std::collections::{BTreeMap, HashSet};
use itertools::Itertools;
use crate::drepr::{self, Alignment, Attr, DRepr, Path, PMap, Preprocessing, Resource};
use crate::errors::*;
use crate::models::ontology::PropertyStore;
use crate::models::semantic_model::SemanticModel;
use crate::models::table::Table;
use crate::namespace::NamespaceService;
use super::naming::AttrNamer;
use super::semantic_model::{get_data_node_datatype, get_drepr_sm, get_entity_data_nodes};
use super::transformation::TransformCatalog;

pub const TABLE_RESOURCE_ID: &str = "table";
pub const ENTITY_RESOURCE_ID: &str = "entity";

/// Indices of the columns that contain entities, in the order of their data nodes
pub fn get_entity_columns(sm: &SemanticModel, ident_props: &HashSet<String>) -> Vec<usize> {
    get_entity_data_nodes(sm, ident_props)
        .into_iter()
        .map(|(_, n)| n.col_index)
        .unique()
        .collect()
}

pub fn build_drepr_model(
    table: &Table,
    sm: &SemanticModel,
    namespace: &NamespaceService,
    ontprops: &dyn PropertyStore,
    ident_props: &HashSet<String>,
    transforms: &TransformCatalog,
) -> Result<DRepr> {
    let resources = vec![Resource::csv(TABLE_RESOURCE_ID), Resource::csv(ENTITY_RESOURCE_ID)];
    let n_columns = table.n_columns();

    if n_columns == 0 {
        return Ok(DRepr {
            resources,
            preprocessing: vec![],
            attrs: vec![],
            aligns: vec![],
            sm: drepr::sm::SemanticModel {
                nodes: BTreeMap::new(),
                edges: vec![],
                prefixes: BTreeMap::new(),
            },
        });
    }

    for (_, dnode) in sm.iter_data_nodes() {
        if dnode.col_index >= n_columns {
            bail!(ErrorKind::InvalidColumnIndex(dnode.col_index, n_columns));
        }
    }

    let mut namer = AttrNamer::new(table);
    let ent_columns = get_entity_columns(sm, ident_props);

    let mut attrs = (0..n_columns)
        .map(|ci| Attr::new(namer.attr_id(ci), TABLE_RESOURCE_ID, Path::column(table.size, ci)))
        .collect::<Vec<_>>();
    for &ci in &ent_columns {
        attrs.push(Attr::new(namer.ent_attr_id(ci), ENTITY_RESOURCE_ID, Path::column(table.size, ci)));
    }

    let drepr_sm = get_drepr_sm(sm, namespace, ontprops, ident_props, &mut namer)?;

    let mut preprocessing = vec![];
    for (nid, dnode) in sm.iter_data_nodes() {
        let datatype = match get_data_node_datatype(sm, nid, namespace, ontprops)? {
            None => continue,
            Some(datatype) => datatype,
        };
        if let Some(code) = transforms.get_transformation(datatype) {
            debug!("Transform column {} as {:?}", dnode.col_index, datatype);
            preprocessing.push(Preprocessing::PMap(PMap {
                resource_id: TABLE_RESOURCE_ID.to_owned(),
                path: Path::column(table.size, dnode.col_index),
                code: code.to_owned(),
                output: None,
                change_structure: false,
            }));
        }
    }

    let first_attr = namer.attr_id(0);
    let mut aligns = (1..n_columns)
        .map(|ci| Alignment::rows(first_attr.clone(), namer.attr_id(ci)))
        .collect::<Vec<_>>();
    for &ci in &ent_columns {
        aligns.push(Alignment::rows(first_attr.clone(), namer.ent_attr_id(ci)));
    }

    Ok(DRepr { resources, preprocessing, attrs, aligns, sm: drepr_sm })
}
