use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};
use sand_drepr::prelude::*;
use sand_drepr::settings::RDFS_LABEL;

pub const WD: &str = "http://www.wikidata.org/entity/";
pub const WDT: &str = "http://www.wikidata.org/prop/direct/";

pub fn wd(id: &str) -> String { format!("{}{}", WD, id) }
pub fn wdt(id: &str) -> String { format!("{}{}", WDT, id) }

pub fn ontprop(id: &str, uri: &str, datatype: OntPropertyDataType) -> OntProperty {
    OntProperty {
        id: id.to_owned(),
        uri: uri.to_owned(),
        label: id.to_owned(),
        readable_label: None,
        datatype,
    }
}

/// Properties used by the fixtures, keyed by id
pub fn ontprops() -> HashMap<String, OntProperty> {
    vec![
        ontprop("rdfs:label", RDFS_LABEL, OntPropertyDataType::String),
        ontprop("wdt:P569", &wdt("P569"), OntPropertyDataType::Datetime),
        ontprop("wdt:P27", &wdt("P27"), OntPropertyDataType::Entity),
        ontprop("wdt:P856", &wdt("P856"), OntPropertyDataType::Url),
        ontprop("wdt:P1082", &wdt("P1082"), OntPropertyDataType::IntegerNumber),
        ontprop("wdt:P1448", &wdt("P1448"), OntPropertyDataType::MonolingualText),
        ontprop("wdt:P1344", &wdt("P1344"), OntPropertyDataType::Entity),
    ].into_iter().map(|p| (p.id.clone(), p)).collect()
}

pub fn appcfg() -> AppConfig {
    let mut appcfg = AppConfig::default();
    appcfg.default_properties.push(ontprop("rdfs:label", RDFS_LABEL, OntPropertyDataType::String));
    appcfg
}

pub fn namespace(appcfg: &AppConfig) -> NamespaceService {
    NamespaceService::new(appcfg).unwrap()
}

pub fn ident_props() -> HashSet<String> {
    vec![RDFS_LABEL.to_owned()].into_iter().collect()
}

pub fn rdfs_label() -> SmEdge { SmEdge::new(RDFS_LABEL, "rdfs:label") }
pub fn prop(id: &str) -> SmEdge { SmEdge::new(&wdt(id), &format!("wdt:{}", id)) }

/// A table of 2 columns & 3 rows: the people (linked to Wikidata) and their birth dates
pub fn people() -> (Table, Vec<TableRow>) {
    let table = Table::new("people", vec!["Name".to_owned(), "Date of Birth".to_owned()], 3);
    let mut rows = vec![
        TableRow::new(0, vec![json!("Abraham Lincoln"), json!("1809-02-12")]),
        TableRow::new(1, vec![json!("George Washington"), json!("1732-02-22")]),
        TableRow::new(2, vec![json!("John Doe"), json!(null)]),
    ];
    rows[0].links.insert(0, vec![Link { start: 0, end: 15, url: None, entity_id: Some("wd:Q91".to_owned()) }]);
    rows[1].links.insert(0, vec![Link { start: 0, end: 17, url: None, entity_id: Some("wd:Q23".to_owned()) }]);
    (table, rows)
}

/// human -rdfs:label-> Name, human -P569-> Date of Birth
pub fn people_sm() -> SemanticModel {
    let mut sm = SemanticModel::new("people".to_owned());
    let human = sm.add_node(SmNode::class_node(&wd("Q5"), "wd:Q5"));
    let name = sm.add_node(SmNode::data_node(0, "Name"));
    let dob = sm.add_node(SmNode::data_node(1, "Date of Birth"));
    sm.add_edge(human, name, rdfs_label()).unwrap();
    sm.add_edge(human, dob, prop("P569")).unwrap();
    sm
}

/// An engine returning a fixed content and recording how it is called
pub struct MockEngine {
    pub output: String,
    pub n_calls: Cell<usize>,
    pub resource_ids: RefCell<Vec<String>>,
}

impl MockEngine {
    pub fn new(output: &str) -> MockEngine {
        MockEngine { output: output.to_owned(), n_calls: Cell::new(0), resource_ids: RefCell::new(vec![]) }
    }
}

impl MappingEngine for MockEngine {
    fn convert(&self, _repr: &DRepr, resources: &BTreeMap<String, ResourceData>, _format: OutputFormat) -> Result<Vec<u8>> {
        self.n_calls.set(self.n_calls.get() + 1);
        *self.resource_ids.borrow_mut() = resources.keys().cloned().collect();
        Ok(self.output.clone().into_bytes())
    }
}

/// An engine that always fails
pub struct FailedEngine;

impl MappingEngine for FailedEngine {
    fn convert(&self, _repr: &DRepr, _resources: &BTreeMap<String, ResourceData>, _format: OutputFormat) -> Result<Vec<u8>> {
        Err(ErrorKind::Engine("out of memory".to_owned()).into())
    }
}

/// Count the calls to the CSV resource builder
#[derive(Default)]
pub struct CountingResourceBuilder {
    pub n_calls: Cell<usize>,
}

impl ResourceBuilder for CountingResourceBuilder {
    fn table_resource(&self, table: &Table, rows: &[TableRow]) -> Result<ResourceData> {
        self.n_calls.set(self.n_calls.get() + 1);
        CsvResourceBuilder.table_resource(table, rows)
    }

    fn entity_resource(&self, namespace: &NamespaceService, table: &Table, rows: &[TableRow], ent_columns: &HashSet<usize>) -> Result<ResourceData> {
        self.n_calls.set(self.n_calls.get() + 1);
        CsvResourceBuilder.entity_resource(namespace, table, rows, ent_columns)
    }
}

/// Owns the collaborators of an export
pub struct Context {
    pub appcfg: AppConfig,
    pub namespace: NamespaceService,
    pub ontprops: HashMap<String, OntProperty>,
    pub transforms: TransformCatalog,
}

impl Context {
    pub fn new() -> Context {
        let appcfg = appcfg();
        Context {
            namespace: namespace(&appcfg),
            ontprops: ontprops(),
            transforms: TransformCatalog::from_config(&appcfg),
            appcfg,
        }
    }

    pub fn exporter<'a>(&'a self, resources: &'a dyn ResourceBuilder, engine: &'a dyn MappingEngine) -> DreprExport<'a> {
        DreprExport {
            appcfg: &self.appcfg,
            namespace: &self.namespace,
            ontprops: &self.ontprops,
            transforms: &self.transforms,
            resources,
            engine,
        }
    }
}
