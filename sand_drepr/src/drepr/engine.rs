use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use crate::errors::*;
use super::model::DRepr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[serde(rename = "ttl")]
    Turtle,
    #[serde(rename = "jsonld")]
    JsonLd,
    #[serde(rename = "nt")]
    NTriples,
}

/// In-memory content of a resource
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData {
    pub value: String,
}

/// The RDF generation engine: reads the resources as described by a D-REPR model and
/// produces RDF in the requested format.
pub trait MappingEngine {
    fn convert(&self, repr: &DRepr, resources: &BTreeMap<String, ResourceData>, format: OutputFormat) -> Result<Vec<u8>>;
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Turtle => "ttl",
            OutputFormat::JsonLd => "jsonld",
            OutputFormat::NTriples => "nt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<OutputFormat> {
        match s {
            "ttl" | "turtle" => Ok(OutputFormat::Turtle),
            "jsonld" | "json-ld" => Ok(OutputFormat::JsonLd),
            "nt" | "ntriples" => Ok(OutputFormat::NTriples),
            _ => bail!("unknown output format: {}", s),
        }
    }
}
