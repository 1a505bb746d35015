use std::collections::BTreeMap;
use fnv::FnvHashMap;
use crate::drepr::sm::SemanticModel as DreprSemanticModel;
use crate::errors::*;
use crate::models::ontology::{Entity, OntClass, OntProperty};
use crate::settings::AppConfig;

/// Conversion between ids & URIs of a knowledge graph
pub trait KnowledgeGraphNamespace: Send + Sync {
    fn uri_to_id(&self, uri: &str) -> String;
    fn id_to_uri(&self, id: &str) -> String;
    fn prefix2ns(&self) -> &BTreeMap<String, String>;
}

/// Generic namespace: an id is a compact URI `prefix:local`. Values that cannot be converted
/// are returned unchanged.
pub struct PrefixNamespace {
    prefix2ns: BTreeMap<String, String>,
    /// (namespace, prefix), longest namespace first
    ns2prefix: Vec<(String, String)>,
}

impl PrefixNamespace {
    pub fn new(prefix2ns: BTreeMap<String, String>) -> PrefixNamespace {
        let mut ns2prefix = prefix2ns.iter()
            .map(|(prefix, ns)| (ns.clone(), prefix.clone()))
            .collect::<Vec<_>>();
        ns2prefix.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        PrefixNamespace { prefix2ns, ns2prefix }
    }
}

impl KnowledgeGraphNamespace for PrefixNamespace {
    fn uri_to_id(&self, uri: &str) -> String {
        for (ns, prefix) in &self.ns2prefix {
            if uri.starts_with(ns.as_str()) {
                return format!("{}:{}", prefix, &uri[ns.len()..]);
            }
        }
        uri.to_owned()
    }

    fn id_to_uri(&self, id: &str) -> String {
        if let Some(i) = id.find(':') {
            if let Some(ns) = self.prefix2ns.get(&id[..i]) {
                return format!("{}{}", ns, &id[i + 1..]);
            }
        }
        id.to_owned()
    }

    fn prefix2ns(&self) -> &BTreeMap<String, String> {
        &self.prefix2ns
    }
}

/// Resolve ids & URIs of entities, classes and properties. The default resources of the
/// application take precedence over the knowledge graph namespace.
///
/// Built once at startup and read-only afterward.
pub struct NamespaceService {
    kgns: Box<dyn KnowledgeGraphNamespace>,
    /// prefixes of the knowledge graph namespace, followed by the default prefixes of D-REPR
    pub kgns_prefixes: BTreeMap<String, String>,
    uri2id: FnvHashMap<String, String>,
    id2uri: FnvHashMap<String, String>,
}

impl NamespaceService {
    pub fn new(appcfg: &AppConfig) -> Result<NamespaceService> {
        NamespaceService::with_kgns(
            Box::new(PrefixNamespace::new(appcfg.kgns.prefixes.clone())),
            &appcfg.default_entities,
            &appcfg.default_classes,
            &appcfg.default_properties,
        )
    }

    pub fn with_kgns(
        kgns: Box<dyn KnowledgeGraphNamespace>,
        default_entities: &[Entity],
        default_classes: &[OntClass],
        default_properties: &[OntProperty],
    ) -> Result<NamespaceService> {
        let mut kgns_prefixes = kgns.prefix2ns().clone();
        kgns_prefixes.extend(DreprSemanticModel::get_default_prefixes());

        let mut uri2id = FnvHashMap::default();
        let mut id2uri = FnvHashMap::default();

        let resources = default_entities.iter().map(|r| (&r.id, &r.uri))
            .chain(default_classes.iter().map(|r| (&r.id, &r.uri)))
            .chain(default_properties.iter().map(|r| (&r.id, &r.uri)));

        for (id, uri) in resources {
            if uri2id.contains_key(uri) {
                bail!(ErrorKind::DuplicatedUri(uri.clone()));
            }
            uri2id.insert(uri.clone(), id.clone());
            id2uri.insert(id.clone(), uri.clone());
        }

        Ok(NamespaceService { kgns, kgns_prefixes, uri2id, id2uri })
    }

    /// Convert an URI to the corresponding ID
    pub fn uri_to_id(&self, uri: &str) -> String {
        match self.uri2id.get(uri) {
            Some(id) => id.clone(),
            None => self.kgns.uri_to_id(uri),
        }
    }

    /// Convert an ID to the corresponding URI
    pub fn id_to_uri(&self, id: &str) -> String {
        match self.id2uri.get(id) {
            Some(uri) => uri.clone(),
            None => self.kgns.id_to_uri(id),
        }
    }

    #[inline]
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.kgns_prefixes
    }
}
