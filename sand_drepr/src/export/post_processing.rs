//! Repair the RDF generated by D-REPR.
//!
//! D-REPR cannot express links that start from a literal node (e.g., a fixed entity linked to
//! every row). For each of these links, we look up a resource generated from the target class
//! node and add the missing triple `<literal> <property> <resource>`. When several resources
//! have the class, named resources come first (ordered by IRI), then blank nodes in the order
//! they appear in the document.
use std::collections::BTreeMap;
use fnv::FnvHashMap;
use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedNode, Subject, Term, Triple};
use oxttl::{TurtleParser, TurtleSerializer};
use crate::drepr::OutputFormat;
use crate::errors::*;
use crate::models::semantic_model::{SemanticModel, SmNode};

/// A subject of the generated RDF and its classes
struct RdfResource {
    subject: Subject,
    types: Vec<String>,
}

/// Labels of blank nodes are not stable across parses, so they are keyed by position
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum ResourceKey {
    Named(String),
    Blank(usize),
}

fn resource_key(subject: &Subject, blank_ids: &mut FnvHashMap<String, usize>) -> ResourceKey {
    match subject {
        Subject::NamedNode(n) => ResourceKey::Named(n.as_str().to_owned()),
        other => {
            let next_id = blank_ids.len();
            ResourceKey::Blank(*blank_ids.entry(other.to_string()).or_insert(next_id))
        },
    }
}

/// Whether the semantic model has links that D-REPR leaves out
pub fn need_post_processing(sm: &SemanticModel) -> bool {
    sm.iter_literal_nodes().any(|(id, _)| sm.out_degree(id) > 0)
}

pub fn post_processing(sm: &SemanticModel, content: &str, format: OutputFormat, prefixes: &BTreeMap<String, String>) -> Result<String> {
    if !need_post_processing(sm) {
        return Ok(content.to_owned());
    }
    if format != OutputFormat::Turtle {
        bail!(ErrorKind::UnsupportedFormat(format.to_string()));
    }

    let mut graph = Graph::new();
    let mut blank_ids = FnvHashMap::default();
    let mut resources: BTreeMap<ResourceKey, RdfResource> = BTreeMap::new();
    for triple in TurtleParser::new().for_reader(content.as_bytes()) {
        let triple = triple?;
        let res = resources.entry(resource_key(&triple.subject, &mut blank_ids))
            .or_insert_with(|| RdfResource { subject: triple.subject.clone(), types: vec![] });
        if triple.predicate == rdf::TYPE {
            if let Term::NamedNode(cls) = &triple.object {
                res.types.push(cls.as_str().to_owned());
            }
        }
        graph.insert(&triple);
    }

    for (lid, literal) in sm.iter_literal_nodes() {
        for edge in sm.out_edges(lid) {
            let class_uri = match sm.get_node(edge.target_id) {
                Some(SmNode::ClassNode(n)) => &n.abs_uri,
                _ => bail!(ErrorKind::InvalidLiteralLink(lid, edge.target_id)),
            };

            let target = resources.values().find(|r| r.types.iter().any(|t| t == class_uri));
            match target {
                None => warn!("No resource of class {} to link from {}", class_uri, literal.value),
                Some(target) => {
                    let triple = Triple::new(
                        NamedNode::new(literal.value.as_str())?,
                        NamedNode::new(edge.data.abs_uri.as_str())?,
                        target.subject.clone(),
                    );
                    graph.insert(&triple);
                }
            }
        }
    }

    let mut serializer = TurtleSerializer::new();
    for (prefix, ns) in prefixes {
        serializer = serializer.with_prefix(prefix.as_str(), ns.as_str())?;
    }
    let mut writer = serializer.for_writer(Vec::new());
    for triple in graph.iter() {
        writer.serialize_triple(triple)?;
    }
    Ok(String::from_utf8(writer.finish()?)?)
}
