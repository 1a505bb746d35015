use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use crate::errors::*;
use crate::models::ontology::{Entity, OntClass, OntProperty, OntPropertyDataType};

pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SemanticModelConf {
    /// properties telling that a column contains entities (e.g., rdfs:label)
    #[serde(rename = "identifiers")]
    pub identifiers_set: HashSet<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KgNsConf {
    /// prefixes of the knowledge graph namespace, e.g., `wd` => `http://www.wikidata.org/entity/`
    pub prefixes: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub semantic_model: SemanticModelConf,
    #[serde(default)]
    pub kgns: KgNsConf,
    #[serde(default)]
    pub default_entities: Vec<Entity>,
    #[serde(default)]
    pub default_classes: Vec<OntClass>,
    #[serde(default)]
    pub default_properties: Vec<OntProperty>,
    /// extra (or overriding) value transformations, keyed by datatype
    #[serde(default)]
    pub transformations: HashMap<OntPropertyDataType, String>,
}

impl Default for SemanticModelConf {
    fn default() -> SemanticModelConf {
        SemanticModelConf {
            identifiers_set: vec![RDFS_LABEL.to_owned()].into_iter().collect(),
        }
    }
}

impl Default for KgNsConf {
    fn default() -> KgNsConf {
        let mut prefixes = BTreeMap::new();
        prefixes.insert("wd".to_owned(), "http://www.wikidata.org/entity/".to_owned());
        prefixes.insert("wdt".to_owned(), "http://www.wikidata.org/prop/direct/".to_owned());
        prefixes.insert("p".to_owned(), "http://www.wikidata.org/prop/".to_owned());
        prefixes.insert("ps".to_owned(), "http://www.wikidata.org/prop/statement/".to_owned());
        prefixes.insert("pq".to_owned(), "http://www.wikidata.org/prop/qualifier/".to_owned());
        KgNsConf { prefixes }
    }
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            semantic_model: SemanticModelConf::default(),
            kgns: KgNsConf::default(),
            default_entities: Vec::new(),
            default_classes: Vec::new(),
            default_properties: Vec::new(),
            transformations: HashMap::new(),
        }
    }
}

impl AppConfig {
    pub fn from_file(fpath: &Path) -> Result<AppConfig> {
        let file = File::open(fpath).chain_err(|| format!("Cannot open settings file: {:?}", fpath))?;
        let conf = serde_yaml::from_reader(BufReader::new(file))
            .chain_err(|| format!("Invalid settings file: {:?}", fpath))?;
        Ok(conf)
    }
}

impl FromStr for AppConfig {
    type Err = Error;

    fn from_str(content: &str) -> Result<AppConfig> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut identifiers = self.semantic_model.identifiers_set.iter().collect::<Vec<_>>();
        identifiers.sort();

        write!(f, r#"
****************************** SETTINGS ******************************
identifiers        : {:?}
kgns prefixes      : {:?}
default entities   : {}
default classes    : {}
default properties : {}
transformations    : {:?}
**********************************************************************
"#,
    identifiers,
    self.kgns.prefixes,
    self.default_entities.len(),
    self.default_classes.len(),
    self.default_properties.len(),
    self.transformations.keys().collect::<Vec<_>>())
    }
}
