//! The D-REPR description of a dataset: which resources to read, how to extract attributes
//! from them, how attributes are aligned, and the semantic model over the attributes.
use std::fmt;
use super::sm::SemanticModel;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DRepr {
    pub resources: Vec<Resource>,
    pub preprocessing: Vec<Preprocessing>,
    pub attrs: Vec<Attr>,
    pub aligns: Vec<Alignment>,
    pub sm: SemanticModel,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Csv,
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CsvProp {
    pub delimiter: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub prop: Option<CsvProp>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub start: usize,
    pub end: Option<usize>,
    pub step: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub val: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Step {
    Range(RangeExpr),
    Index(IndexExpr),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Path {
    pub steps: Vec<Step>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sorted {
    None,
    Ascending,
    Descending,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Unspecified,
    Int,
    Float,
    String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attr {
    pub id: String,
    pub resource_id: String,
    pub path: Path,
    pub missing_values: Vec<String>,
    pub unique: bool,
    pub sorted: Sorted,
    pub value_type: ValueType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PMap {
    pub resource_id: String,
    pub path: Path,
    pub code: String,
    pub output: Option<String>,
    pub change_structure: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Preprocessing {
    PMap(PMap),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedStep {
    pub source_idx: usize,
    pub target_idx: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RangeAlignment {
    pub source: String,
    pub target: String,
    pub aligned_steps: Vec<AlignedStep>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Alignment {
    Range(RangeAlignment),
}

impl Resource {
    pub fn csv(id: &str) -> Resource {
        Resource {
            id: id.to_owned(),
            resource_type: ResourceType::Csv,
            prop: Some(CsvProp { delimiter: ",".to_owned() }),
        }
    }
}

impl Path {
    /// Path that selects the cell at column `col_index` of every row in `[0, n_rows)`
    pub fn column(n_rows: usize, col_index: usize) -> Path {
        Path {
            steps: vec![
                Step::Range(RangeExpr { start: 0, end: Some(n_rows), step: 1 }),
                Step::Index(IndexExpr { val: col_index }),
            ]
        }
    }
}

/// Path in the JSONPath-like syntax of the D-REPR language, e.g: `$[0:10:1][2]`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "$")?;
        for step in &self.steps {
            match step {
                Step::Range(r) => match r.end {
                    Some(end) => write!(f, "[{}:{}:{}]", r.start, end, r.step)?,
                    None => write!(f, "[{}::{}]", r.start, r.step)?,
                },
                Step::Index(i) => write!(f, "[{}]", i.val)?,
            }
        }
        Ok(())
    }
}

impl Attr {
    pub fn new(id: String, resource_id: &str, path: Path) -> Attr {
        Attr {
            id,
            resource_id: resource_id.to_owned(),
            path,
            missing_values: vec!["".to_owned()],
            unique: false,
            sorted: Sorted::None,
            value_type: ValueType::Unspecified,
        }
    }
}

impl Alignment {
    /// Row-wise alignment: the first step of both attributes iterates over the same index
    pub fn rows(source: String, target: String) -> Alignment {
        Alignment::Range(RangeAlignment {
            source,
            target,
            aligned_steps: vec![AlignedStep { source_idx: 0, target_idx: 0 }],
        })
    }
}

impl DRepr {
    pub fn get_attr_by_id(&self, id: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.id == id)
    }

    pub fn to_json(&self) -> ::serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
