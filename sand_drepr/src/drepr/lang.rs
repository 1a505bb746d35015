//! Render a D-REPR description in the compact YAML language of D-REPR.
use std::collections::BTreeMap;
use serde_yaml::{Mapping, Value};
use crate::errors::*;
use super::model::*;
use super::sm::{DataType, Node};

#[derive(Serialize)]
struct LangDRepr {
    version: &'static str,
    resources: Mapping,
    preprocessing: Vec<Value>,
    attributes: Mapping,
    alignments: Vec<Value>,
    semantic_model: Mapping,
}

#[derive(Serialize)]
struct LangResource<'a> {
    #[serde(rename = "type")]
    resource_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    delimiter: Option<&'a str>,
}

#[derive(Serialize)]
struct LangPMap<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    resource_id: &'a str,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    change_structure: bool,
    code: &'a str,
}

#[derive(Serialize)]
struct LangAttr<'a> {
    resource_id: &'a str,
    path: String,
    missing_values: &'a [String],
    #[serde(skip_serializing_if = "is_false")]
    unique: bool,
}

#[derive(Serialize)]
struct LangAlignedDim {
    source: usize,
    target: usize,
}

#[derive(Serialize)]
struct LangAlignment<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    source: &'a str,
    target: &'a str,
    aligned_dims: Vec<LangAlignedDim>,
}

#[derive(Serialize, Default)]
struct LangClass {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    static_properties: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    links: Vec<Vec<String>>,
}

fn is_false(x: &bool) -> bool { !*x }

fn property(predicate: &str, object: &str, data_type: &Option<DataType>, prefixes: &mut BTreeMap<String, String>) -> Vec<String> {
    let mut prop = vec![predicate.to_owned(), object.to_owned()];
    if let Some(dt) = data_type {
        prop.push(dt.get_rel_uri());
        for (prefix, ns) in &dt.prefixes {
            prefixes.entry(prefix.clone()).or_insert_with(|| ns.clone());
        }
    }
    prop
}

impl DRepr {
    /// Serialize the description into the YAML language of D-REPR.
    ///
    /// Each class node becomes an entry `<label>:<node_id>` listing its data properties, static
    /// (literal) properties and links to other class nodes.
    pub fn to_lang_yml(&self) -> Result<String> {
        let mut resources = Mapping::new();
        for res in &self.resources {
            let value = LangResource {
                resource_type: res.resource_type,
                delimiter: res.prop.as_ref().map(|p| p.delimiter.as_str()),
            };
            resources.insert(Value::String(res.id.clone()), serde_yaml::to_value(&value)?);
        }

        let mut preprocessing = Vec::with_capacity(self.preprocessing.len());
        for prepro in &self.preprocessing {
            match prepro {
                Preprocessing::PMap(pmap) => preprocessing.push(serde_yaml::to_value(&LangPMap {
                    kind: "pmap",
                    resource_id: &pmap.resource_id,
                    path: pmap.path.to_string(),
                    output: pmap.output.as_ref().map(|x| x.as_str()),
                    change_structure: pmap.change_structure,
                    code: &pmap.code,
                })?),
            }
        }

        let mut attributes = Mapping::new();
        for attr in &self.attrs {
            let value = LangAttr {
                resource_id: &attr.resource_id,
                path: attr.path.to_string(),
                missing_values: &attr.missing_values,
                unique: attr.unique,
            };
            attributes.insert(Value::String(attr.id.clone()), serde_yaml::to_value(&value)?);
        }

        let mut alignments = Vec::with_capacity(self.aligns.len());
        for align in &self.aligns {
            match align {
                Alignment::Range(ra) => alignments.push(serde_yaml::to_value(&LangAlignment {
                    kind: "range",
                    source: &ra.source,
                    target: &ra.target,
                    aligned_dims: ra.aligned_steps.iter()
                        .map(|s| LangAlignedDim { source: s.source_idx, target: s.target_idx })
                        .collect(),
                })?),
            }
        }

        Ok(serde_yaml::to_string(&LangDRepr {
            version: "2",
            resources,
            preprocessing,
            attributes,
            alignments,
            semantic_model: self.lang_semantic_model()?,
        })?)
    }

    fn lang_semantic_model(&self) -> Result<Mapping> {
        let sm = &self.sm;
        let mut prefixes = sm.prefixes.clone();
        let mut classes: BTreeMap<&str, (String, LangClass)> = BTreeMap::new();
        for node in sm.nodes.values() {
            if let Node::ClassNode(n) = node {
                classes.insert(&n.node_id, (format!("{}:{}", n.label, n.node_id), LangClass::default()));
            }
        }

        for edge in &sm.edges {
            let target = match sm.get_node(&edge.target_id) {
                Some(node) => node,
                None => bail!(ErrorKind::InvalidModel(format!("edge {} targets a missing node {}", edge.edge_id, edge.target_id))),
            };
            let target_key = match target {
                Node::ClassNode(n) => classes.get(n.node_id.as_str()).map(|c| c.0.clone()),
                _ => None,
            };

            let class = match classes.get_mut(edge.source_id.as_str()) {
                Some(c) => &mut c.1,
                None => {
                    debug!("Skip edge {} as its source {} is not a class node", edge.edge_id, edge.source_id);
                    continue;
                }
            };

            match target {
                Node::DataNode(n) => class.properties.push(property(&edge.label, &n.attr_id, &n.data_type, &mut prefixes)),
                Node::LiteralNode(n) => class.static_properties.push(property(&edge.label, &n.value, &n.data_type, &mut prefixes)),
                Node::ClassNode(_) => class.links.push(vec![edge.label.clone(), target_key.unwrap_or_default()]),
            }
        }

        let mut mapping = Mapping::new();
        for (_, (key, class)) in classes {
            mapping.insert(Value::String(key), serde_yaml::to_value(&class)?);
        }
        mapping.insert(Value::String("prefixes".to_owned()), serde_yaml::to_value(&prefixes)?);
        Ok(mapping)
    }
}
