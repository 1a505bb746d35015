use std::collections::BTreeMap;
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Table {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub columns: Vec<String>,
    /// number of rows
    pub size: usize,
}

/// Result of entity linking for a span of a cell
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub row: Vec<Value>,
    /// links of each cell, keyed by the column index
    #[serde(default)]
    pub links: BTreeMap<usize, Vec<Link>>,
}

impl Table {
    pub fn new(id: &str, columns: Vec<String>, size: usize) -> Table {
        Table { id: id.to_owned(), name: id.to_owned(), columns, size }
    }

    #[inline]
    pub fn n_columns(&self) -> usize { self.columns.len() }
}

impl TableRow {
    pub fn new(index: usize, row: Vec<Value>) -> TableRow {
        TableRow { index, row, links: BTreeMap::new() }
    }

    /// Text of a cell as it is written to the resources. Missing cells are empty.
    pub fn cell_text(&self, ci: usize) -> String {
        match self.row.get(ci) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
        }
    }

    /// Id of the first entity linked to a cell, if any
    pub fn first_entity_id(&self, ci: usize) -> Option<&str> {
        self.links.get(&ci)?
            .iter()
            .filter_map(|link| link.entity_id.as_ref())
            .map(|id| id.as_str())
            .next()
    }
}
