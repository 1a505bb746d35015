use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OntPropertyDataType {
    GlobeCoordinate,
    Url,
    Entity,
    String,
    IntegerNumber,
    DecimalNumber,
    Datetime,
    MonolingualText,
    Quantity,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub uri: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OntClass {
    pub id: String,
    pub uri: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub readable_label: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OntProperty {
    pub id: String,
    pub uri: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub readable_label: Option<String>,
    pub datatype: OntPropertyDataType,
}

impl OntClass {
    pub fn get_readable_label(&self) -> &str {
        self.readable_label.as_ref().unwrap_or(&self.label)
    }
}

impl OntProperty {
    pub fn get_readable_label(&self) -> &str {
        self.readable_label.as_ref().unwrap_or(&self.label)
    }
}

/// Read access to the ontology properties, keyed by their ids
pub trait PropertyStore {
    fn get_property(&self, id: &str) -> Option<&OntProperty>;
}

impl PropertyStore for HashMap<String, OntProperty> {
    fn get_property(&self, id: &str) -> Option<&OntProperty> {
        self.get(id)
    }
}

/// Read access to the ontology classes, keyed by their ids
pub trait ClassStore {
    fn get_class(&self, id: &str) -> Option<&OntClass>;
}

impl ClassStore for HashMap<String, OntClass> {
    fn get_class(&self, id: &str) -> Option<&OntClass> {
        self.get(id)
    }
}
